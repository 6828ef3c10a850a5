//! # Splitting

use crate::matching::Regex;

impl Regex {
    /// Split `content` at every non-overlapping match of the whole pattern.
    ///
    /// Matching follows [`Regex::scan`]. Capture groups are ignored.
    /// A match at the start (or end) yields a leading (or trailing) empty
    /// segment; no match yields `[content]`.
    ///
    /// Interleaving the segments with the matched separators
    /// reconstructs `content` exactly.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, content)))]
    pub fn split<'h>(
        &self,
        content: &'h str,
    ) -> Vec<&'h str> {
        let mut segments = Vec::new();
        let mut last = 0;
        for raw in self.engine().raw_matches(content) {
            segments.push(&content[last..raw.span.start]);
            last = raw.span.end;
        }
        segments.push(&content[last..]);
        segments
    }
}

/// See [`Regex::split`].
pub fn split<'h>(
    regex: &Regex,
    content: &'h str,
) -> Vec<&'h str> {
    regex.split(content)
}
