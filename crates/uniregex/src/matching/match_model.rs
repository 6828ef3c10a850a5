//! # Match Model

use core::ops::Range;

use crate::engine::RawMatch;

/// A single match of a [`Regex`](crate::Regex).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    /// The full text matched by the whole pattern.
    pub content: String,

    /// One entry per capture group, in declaration order.
    ///
    /// `None` means the group did not participate in the match;
    /// `Some("")` means it matched the empty string.
    pub submatches: Vec<Option<String>>,

    /// The byte range of `content` in the searched text.
    pub range: Range<usize>,
}

impl Match {
    /// Normalize a raw engine match into owned substrings.
    ///
    /// ## Arguments
    /// * `haystack` - the text the match was found in.
    /// * `raw` - the engine's byte offsets.
    pub fn from_raw(
        haystack: &str,
        raw: RawMatch,
    ) -> Self {
        Self {
            content: haystack[raw.span.clone()].to_string(),
            submatches: raw
                .groups
                .into_iter()
                .map(|group| group.map(|span| haystack[span].to_string()))
                .collect(),
            range: raw.span,
        }
    }

    /// The byte offset where the match starts.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// The byte offset where the match ends.
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// Is this a zero-width match?
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Get a capture group by index; `0` is the whole match.
    ///
    /// ## Returns
    /// `None` if the group is out of range or did not participate.
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&str> {
        match index {
            0 => Some(&self.content),
            i => self.submatches.get(i - 1)?.as_deref(),
        }
    }
}
