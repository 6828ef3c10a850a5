//! # Scanning and Containment

use crate::matching::{Match, Regex};

impl Regex {
    /// Does `content` contain at least one match?
    ///
    /// Equivalent to `!self.scan(content).is_empty()`,
    /// but stops at the first match and allocates nothing.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, content)))]
    pub fn check(
        &self,
        content: &str,
    ) -> bool {
        self.engine().find_from(content, 0).is_some()
    }

    /// Lazily iterate all non-overlapping matches, left to right.
    ///
    /// ## Arguments
    /// * `content` - The string to search in.
    pub fn matches<'r, 'h>(
        &'r self,
        content: &'h str,
    ) -> impl Iterator<Item = Match> {
        self.engine()
            .raw_matches(content)
            .map(move |raw| Match::from_raw(content, raw))
    }

    /// Find all non-overlapping matches, left to right.
    ///
    /// After a non-empty match the search resumes at its end;
    /// after a zero-width match it resumes one char later.
    ///
    /// ## Returns
    /// Every match with all capture groups; empty if nothing matches.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, content)))]
    pub fn scan(
        &self,
        content: &str,
    ) -> Vec<Match> {
        self.matches(content).collect()
    }

    /// The first match in `content`, if any.
    pub fn first(
        &self,
        content: &str,
    ) -> Option<Match> {
        self.matches(content).next()
    }
}

/// See [`Regex::check`].
pub fn check(
    regex: &Regex,
    content: &str,
) -> bool {
    regex.check(content)
}

/// See [`Regex::scan`].
pub fn scan(
    regex: &Regex,
    content: &str,
) -> Vec<Match> {
    regex.scan(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngineKind, Options, compile, from_string};

    fn all_engines(
        pattern: &str,
        options: Options,
    ) -> Vec<Regex> {
        [EngineKind::Basic, EngineKind::Fancy]
            .into_iter()
            .map(|kind| Regex::with_engine(pattern, options, kind).unwrap())
            .collect()
    }

    fn contents(matches: &[Match]) -> Vec<&str> {
        matches.iter().map(|m| m.content.as_str()).collect()
    }

    #[test]
    fn test_check() {
        let re = from_string("^f.o$").unwrap();
        assert!(re.check("foo"));
        assert!(!re.check("boo"));
        assert!(!re.check(""));

        assert!(check(&from_string("").unwrap(), ""));
    }

    #[test]
    fn test_scan_with_groups() {
        for re in all_engines(r"([+|\-])?(\d+)(\w+)?", Options::default()) {
            let found = scan(&re, "-36 99");

            assert_eq!(found.len(), 2);
            assert_eq!(found[0].content, "-36");
            assert_eq!(
                found[0].submatches,
                vec![Some("-".to_string()), Some("36".to_string()), None]
            );
            assert_eq!(found[1].content, "99");
            assert_eq!(found[1].submatches, vec![None, Some("99".to_string()), None]);
        }
    }

    #[test]
    fn test_absent_vs_empty_group() {
        for re in all_engines("(a)?b", Options::default()) {
            assert_eq!(re.scan("b")[0].submatches, vec![None]);
            assert_eq!(re.scan("ab")[0].submatches, vec![Some("a".to_string())]);
        }
        for re in all_engines("(a*)b", Options::default()) {
            assert_eq!(re.scan("b")[0].submatches, vec![Some(String::new())]);
        }
    }

    #[test]
    fn test_scan_no_match() {
        let re = from_string("z+").unwrap();
        assert!(re.scan("abc").is_empty());
        assert_eq!(re.first("abc"), None);
    }

    #[test]
    fn test_scan_zero_width() {
        for re in all_engines("x*", Options::default()) {
            let found = re.scan("axxb");
            assert_eq!(contents(&found), vec!["", "xx", "", ""]);
            assert_eq!(
                found.iter().map(|m| m.range.clone()).collect::<Vec<_>>(),
                vec![0..0, 1..3, 3..3, 4..4]
            );
        }
    }

    #[test]
    fn test_case_insensitive() {
        for re in all_engines("abc", Options::new(true, false)) {
            assert!(re.check("ABC"));
            assert_eq!(contents(&re.scan("xAbC")), vec!["AbC"]);
        }
        for re in all_engines("abc", Options::default()) {
            assert!(!re.check("ABC"));
        }
    }

    #[test]
    fn test_case_insensitive_backreference_is_case_sensitive() {
        let options = Options::new(true, false);
        for kind in [EngineKind::Fancy, EngineKind::Adaptive] {
            let re = Regex::with_engine(r"(a)\1", options, kind).unwrap();
            assert_eq!(re.engine_kind(), EngineKind::Fancy);

            assert!(re.check("aa"), "{kind:?}");
            assert!(re.check("AA"), "{kind:?}");
            assert!(!re.check("aA"), "{kind:?}");
            assert!(!re.check("Aa"), "{kind:?}");
        }
        assert!(Regex::with_engine(r"(a)\1", options, EngineKind::Basic).is_err());
    }

    #[test]
    fn test_multi_line() {
        for re in all_engines("^b", Options::new(false, true)) {
            assert!(re.check("a\nb"));
            assert_eq!(re.first("a\nb").unwrap().range, 2..3);
        }
        for re in all_engines("^b", Options::default()) {
            assert!(!re.check("a\nb"));
        }
        for re in all_engines("a$", Options::new(false, true)) {
            assert_eq!(re.scan("a\na").len(), 2);
        }
    }

    #[test]
    fn test_first() {
        let re = compile(r"(\d)", Options::default()).unwrap();
        let m = re.first("ab12").unwrap();
        assert_eq!(m.content, "1");
        assert_eq!(m.range, 2..3);
    }

    #[test]
    fn test_unicode_offsets() {
        let re = from_string("é+").unwrap();
        let found = re.scan("aéé b é");
        assert_eq!(contents(&found), vec!["éé", "é"]);
        assert_eq!(found[0].range, 1..5);
    }
}
