//! # Engine Error Wrapper

use crate::Options;

/// Error wrapper for engine compile failures.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum EngineError {
    /// Error from `regex`.
    Basic(Box<regex::Error>),

    /// Error from `fancy_regex`.
    Fancy(Box<fancy_regex::Error>),
}

impl From<regex::Error> for EngineError {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err.into())
    }
}

impl From<fancy_regex::Error> for EngineError {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err.into())
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for EngineError {}

impl EngineError {
    /// Best-effort byte offset of the failure within `pattern`.
    ///
    /// `regex::Error` carries no position, so the pattern is re-parsed with
    /// `regex_syntax` to locate the error. `fancy_regex` reports parse positions
    /// against the flag-prefixed pattern it was given; the prefix is subtracted.
    ///
    /// The result is clamped onto a char boundary inside `pattern`
    /// (`0` for the empty pattern).
    ///
    /// ## Arguments
    /// * `pattern` - the pattern as passed to compile, without flag prefixes.
    /// * `options` - the options the pattern was compiled with.
    pub fn byte_index(
        &self,
        pattern: &str,
        options: &Options,
    ) -> usize {
        let offset = match self {
            Self::Basic(_) => syntax_error_offset(pattern, options),
            Self::Fancy(err) => match err.as_ref() {
                fancy_regex::Error::ParseError(pos, _) => {
                    Some(pos.saturating_sub(options.inline_flags().len()))
                }
                _ => syntax_error_offset(pattern, options),
            },
        };
        clamp_to_pattern(pattern, offset.unwrap_or(0))
    }

    /// Human-readable message, phrased against the caller's `pattern`.
    ///
    /// `fancy_regex` parse errors are re-stated without the inline flag prefix,
    /// so the reported position is the same for every [`Options`].
    /// When `fancy_regex` wraps a failure of its inner `regex` compile,
    /// the underlying `regex` syntax error is appended.
    ///
    /// ## Arguments
    /// * `pattern` - the pattern as passed to compile, without flag prefixes.
    /// * `options` - the options the pattern was compiled with.
    pub fn message(
        &self,
        pattern: &str,
        options: &Options,
    ) -> String {
        let Self::Fancy(err) = self else {
            return self.to_string();
        };
        match err.as_ref() {
            fancy_regex::Error::ParseError(pos, kind) => {
                let pos = pos.saturating_sub(options.inline_flags().len());
                format!("Parsing error at position {pos}: {kind}")
            }
            fancy_regex::Error::CompileError(_) => match syntax_error(pattern, options) {
                Some(syntax) => format!("{err}: {syntax}"),
                None => err.to_string(),
            },
            _ => err.to_string(),
        }
    }
}

/// Re-parse `pattern` with the `regex_syntax` parser.
///
/// ## Returns
/// `None` if the pattern parses cleanly.
fn syntax_error(
    pattern: &str,
    options: &Options,
) -> Option<regex_syntax::Error> {
    regex_syntax::ParserBuilder::new()
        .case_insensitive(options.case_insensitive)
        .multi_line(options.multi_line)
        .build()
        .parse(pattern)
        .err()
}

/// Locate a syntax error with the `regex_syntax` parser.
///
/// ## Returns
/// `None` if the pattern parses cleanly.
pub(crate) fn syntax_error_offset(
    pattern: &str,
    options: &Options,
) -> Option<usize> {
    match syntax_error(pattern, options)? {
        regex_syntax::Error::Parse(err) => Some(err.span().start.offset),
        regex_syntax::Error::Translate(err) => Some(err.span().start.offset),
        _ => None,
    }
}

fn clamp_to_pattern(
    pattern: &str,
    index: usize,
) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    let mut index = index.min(pattern.len() - 1);
    while !pattern.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_pattern() {
        assert_eq!(clamp_to_pattern("", 12), 0);
        assert_eq!(clamp_to_pattern("abc", 1), 1);
        assert_eq!(clamp_to_pattern("abc", 3), 2);
        assert_eq!(clamp_to_pattern("abc", 99), 2);

        // 'é' is two bytes; offset 2 lands mid-char.
        assert_eq!(clamp_to_pattern("aé", 2), 1);
        assert_eq!(clamp_to_pattern("aé", 9), 1);
    }

    #[test]
    fn test_syntax_error_offset() {
        let options = Options::default();
        assert_eq!(syntax_error_offset("abc", &options), None);
        assert_eq!(syntax_error_offset("", &options), None);

        assert_eq!(syntax_error_offset("[0-9", &options), Some(0));
        assert_eq!(syntax_error_offset("ab(c", &options), Some(2));
    }

    #[test]
    fn test_basic_byte_index() {
        let options = Options::default();
        let err: EngineError = regex::Regex::new("xy(z").unwrap_err().into();
        assert!(matches!(err, EngineError::Basic(_)));
        assert_eq!(err.byte_index("xy(z", &options), 2);
    }

    #[test]
    fn test_fancy_byte_index_in_bounds() {
        let options = Options::new(true, true);
        let pattern = "(?=a)[0-9";
        let prefixed = format!("{}{}", options.inline_flags(), pattern);
        let err: EngineError = fancy_regex::Regex::new(&prefixed).unwrap_err().into();
        assert!(matches!(err, EngineError::Fancy(_)));
        assert!(err.byte_index(pattern, &options) < pattern.len());
    }

    #[test]
    fn test_fancy_message_ignores_flag_prefix() {
        let pattern = "a(?=b";
        let messages: Vec<String> = [Options::default(), Options::new(true, true)]
            .iter()
            .map(|options| {
                let prefixed = format!("{}{}", options.inline_flags(), pattern);
                let err: EngineError = fancy_regex::Regex::new(&prefixed).unwrap_err().into();
                err.message(pattern, options)
            })
            .collect();

        assert_eq!(messages[0], messages[1]);
        assert!(messages[0].starts_with("Parsing error at position 5:"));
    }

    #[test]
    fn test_fancy_message_expands_inner_regex_error() {
        let pattern = "a{2,1}";
        let options = Options::default();
        let err: EngineError = fancy_regex::Regex::new(pattern).unwrap_err().into();

        let message = err.message(pattern, &options);
        assert!(message.contains("invalid repetition count range"), "{message}");
    }

    #[test]
    fn test_basic_message_is_display() {
        let options = Options::default();
        let err: EngineError = regex::Regex::new("[").unwrap_err().into();
        assert_eq!(err.message("[", &options), err.to_string());
    }

    #[test]
    fn test_display() {
        let err: EngineError = regex::Regex::new("[").unwrap_err().into();
        assert!(format!("{}", err).contains("regex parse error"));
    }
}
