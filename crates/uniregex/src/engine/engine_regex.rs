//! # Engine Regex Wrapper
//! This module mixes `regex` and `fancy_regex` compiled types behind one
//! raw-offset contract.

use core::ops::Range;

/// A raw match, in byte offsets into the haystack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawMatch {
    /// The span of the whole match.
    pub span: Range<usize>,

    /// The span of each capture group, in declaration order;
    /// `None` when the group did not participate.
    pub groups: Vec<Option<Range<usize>>>,
}

/// Wrapper for compiled engine regexes.
#[derive(Debug, Clone)]
pub enum EngineRegex {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for EngineRegex {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for EngineRegex {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl EngineRegex {
    /// Is this `Basic`?
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic(_))
    }

    /// Is this `Fancy`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// The number of capture groups, excluding the implicit whole-match group.
    pub fn captures_len(&self) -> usize {
        match self {
            Self::Basic(regex) => regex.captures_len() - 1,
            Self::Fancy(regex) => regex.captures_len() - 1,
        }
    }

    /// Find the span of the first match starting at or after `pos`.
    ///
    /// Anchors and word boundaries still see the text before `pos`.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    /// * `pos` - A char boundary of `haystack` to start from.
    pub fn find_from(
        &self,
        haystack: &str,
        pos: usize,
    ) -> Option<Range<usize>> {
        match self {
            Self::Basic(regex) => regex.find_at(haystack, pos).map(|m| m.range()),
            Self::Fancy(regex) => match regex.find_from_pos(haystack, pos) {
                Ok(found) => found.map(|m| m.range()),
                Err(err) => {
                    log::warn!("fancy engine failed at {pos} for {:?}: {err}", regex.as_str());
                    None
                }
            },
        }
    }

    /// Find the first match, with capture groups, starting at or after `pos`.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    /// * `pos` - A char boundary of `haystack` to start from.
    pub fn captures_from(
        &self,
        haystack: &str,
        pos: usize,
    ) -> Option<RawMatch> {
        match self {
            Self::Basic(regex) => {
                let caps = regex.captures_at(haystack, pos)?;
                Some(RawMatch {
                    span: caps.get(0)?.range(),
                    groups: (1..caps.len())
                        .map(|i| caps.get(i).map(|m| m.range()))
                        .collect(),
                })
            }
            Self::Fancy(regex) => {
                let caps = match regex.captures_from_pos(haystack, pos) {
                    Ok(caps) => caps?,
                    Err(err) => {
                        log::warn!(
                            "fancy engine failed at {pos} for {:?}: {err}",
                            regex.as_str()
                        );
                        return None;
                    }
                };
                Some(RawMatch {
                    span: caps.get(0)?.range(),
                    groups: (1..caps.len())
                        .map(|i| caps.get(i).map(|m| m.range()))
                        .collect(),
                })
            }
        }
    }

    /// Iterate all non-overlapping matches, left to right.
    ///
    /// After a non-empty match the search resumes at its end; after an
    /// empty match it resumes one char later. This is the same on both engines.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    pub fn raw_matches<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> RawMatches<'r, 'h> {
        RawMatches {
            regex: self,
            haystack,
            pos: Some(0),
        }
    }
}

/// Iterator over [`RawMatch`]es; see [`EngineRegex::raw_matches`].
pub struct RawMatches<'r, 'h> {
    regex: &'r EngineRegex,
    haystack: &'h str,
    pos: Option<usize>,
}

impl<'r, 'h> Iterator for RawMatches<'r, 'h> {
    type Item = RawMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.pos?;
        let Some(m) = self.regex.captures_from(self.haystack, pos) else {
            self.pos = None;
            return None;
        };

        self.pos = if m.span.is_empty() {
            next_char_boundary(self.haystack, m.span.end)
        } else {
            Some(m.span.end)
        };

        Some(m)
    }
}

/// The char boundary after the char at `pos`; `None` at the end of `text`.
fn next_char_boundary(
    text: &str,
    pos: usize,
) -> Option<usize> {
    text[pos..].chars().next().map(|c| pos + c.len_utf8())
}
