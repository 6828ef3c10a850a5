//! # Compile Options

/// Compile-time options for [`compile`](crate::compile).
///
/// Every engine honors these identically, except for backreferences under
/// `case_insensitive`; see [`EngineKind`](crate::engine::EngineKind).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Options {
    /// Fold case across the pattern and the input.
    ///
    /// Backreferences are the exception: on the fancy engine (`fancy_regex`
    /// 0.13) a backreference still matches the captured text case-sensitively,
    /// so `(a)\1` matches `"AA"` but not `"aA"`. Only the fancy engine
    /// accepts backreferences at all.
    pub case_insensitive: bool,

    /// Make `^` and `$` anchor at line-feed boundaries,
    /// rather than only at the start and end of the input.
    pub multi_line: bool,
}

impl Options {
    /// Create a new `Options`.
    ///
    /// ## Arguments
    /// * `case_insensitive` - fold case when matching.
    /// * `multi_line` - anchor `^`/`$` at line boundaries.
    pub const fn new(
        case_insensitive: bool,
        multi_line: bool,
    ) -> Self {
        Self {
            case_insensitive,
            multi_line,
        }
    }

    /// Set the case-insensitive flag.
    pub const fn with_case_insensitive(
        mut self,
        case_insensitive: bool,
    ) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Set the multi-line flag.
    pub const fn with_multi_line(
        mut self,
        multi_line: bool,
    ) -> Self {
        self.multi_line = multi_line;
        self
    }

    /// The inline flag group equivalent to these options.
    ///
    /// ## Returns
    /// One of `""`, `"(?i)"`, `"(?m)"` or `"(?im)"`.
    pub const fn inline_flags(&self) -> &'static str {
        match (self.case_insensitive, self.multi_line) {
            (false, false) => "",
            (true, false) => "(?i)",
            (false, true) => "(?m)",
            (true, true) => "(?im)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let options = Options::default();
        assert!(!options.case_insensitive);
        assert!(!options.multi_line);
        assert_eq!(options, Options::new(false, false));
    }

    #[test]
    fn test_builders() {
        let options = Options::default()
            .with_case_insensitive(true)
            .with_multi_line(true);
        assert_eq!(options, Options::new(true, true));

        let options = options.with_multi_line(false);
        assert_eq!(options, Options::new(true, false));
    }

    #[test]
    fn test_inline_flags() {
        assert_eq!(Options::new(false, false).inline_flags(), "");
        assert_eq!(Options::new(true, false).inline_flags(), "(?i)");
        assert_eq!(Options::new(false, true).inline_flags(), "(?m)");
        assert_eq!(Options::new(true, true).inline_flags(), "(?im)");
    }
}
