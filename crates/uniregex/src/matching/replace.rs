//! # Substitution
//!
//! The substitute text is always inserted verbatim. Engine replacement
//! syntax such as `$1` or `${name}` is *not* expanded, on any engine;
//! use [`Regex::replace_map`] to build replacements from capture groups.

use std::borrow::Cow;

use crate::matching::{Match, Regex};

impl Regex {
    /// Replace matches in `content` with `substitute`, verbatim.
    ///
    /// ## Arguments
    /// * `content` - the text to rewrite.
    /// * `substitute` - literal replacement text.
    /// * `global` - replace every match (following [`Regex::scan`]) when `true`;
    ///   only the first match when `false`.
    ///
    /// ## Returns
    /// The rewritten text; `Cow::Borrowed(content)` when nothing matched.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, content, substitute))
    )]
    pub fn replace<'h>(
        &self,
        content: &'h str,
        substitute: &str,
        global: bool,
    ) -> Cow<'h, str> {
        let limit = if global { usize::MAX } else { 1 };

        let mut spans = self.engine().raw_matches(content).take(limit).peekable();
        if spans.peek().is_none() {
            return Cow::Borrowed(content);
        }

        let mut out = String::with_capacity(content.len());
        let mut last = 0;
        for raw in spans {
            out.push_str(&content[last..raw.span.start]);
            out.push_str(substitute);
            last = raw.span.end;
        }
        out.push_str(&content[last..]);
        Cow::Owned(out)
    }

    /// Replace every match with the value computed from it.
    ///
    /// ## Arguments
    /// * `content` - the text to rewrite.
    /// * `f` - called once per match, left to right.
    pub fn replace_map<'h, F>(
        &self,
        content: &'h str,
        mut f: F,
    ) -> Cow<'h, str>
    where
        F: FnMut(&Match) -> String,
    {
        let mut matches = self.matches(content).peekable();
        if matches.peek().is_none() {
            return Cow::Borrowed(content);
        }

        let mut out = String::with_capacity(content.len());
        let mut last = 0;
        for m in matches {
            out.push_str(&content[last..m.start()]);
            out.push_str(&f(&m));
            last = m.end();
        }
        out.push_str(&content[last..]);
        Cow::Owned(out)
    }
}

/// See [`Regex::replace`].
pub fn replace<'h>(
    string: &'h str,
    pattern: &Regex,
    substitute: &str,
    global: bool,
) -> Cow<'h, str> {
    pattern.replace(string, substitute, global)
}

/// See [`Regex::replace_map`].
pub fn replace_map<'h, F>(
    regex: &Regex,
    content: &'h str,
    f: F,
) -> Cow<'h, str>
where
    F: FnMut(&Match) -> String,
{
    regex.replace_map(content, f)
}
