//! # Engine Collaborators
//!
//! Matching itself is delegated to one of two engines:
//! the standard [`regex`] crate, or the backtracking [`fancy_regex`] crate,
//! which supports look-around and backreferences at some performance cost.
//!
//! * Labeling Patterns - [`EnginePattern`] / [`EngineKind`]
//!   * [`EngineKind::Basic`] - a pattern which was written for [`regex`].
//!   * [`EngineKind::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`EngineKind::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`EngineRegex`]
//! * Wrapping Compile Errors - [`EngineError`]
//!
//! [`EngineRegex`] reports raw byte offsets only; [`crate::matching`]
//! normalizes them into the public data model.

mod alt_choice;
mod engine_error;
mod engine_pattern;
mod engine_regex;

#[doc(inline)]
pub use alt_choice::{alternate_choice_pattern, escape};
#[doc(inline)]
pub use engine_error::EngineError;
#[doc(inline)]
pub use engine_pattern::{EngineKind, EnginePattern};
#[doc(inline)]
pub use engine_regex::{EngineRegex, RawMatch, RawMatches};
