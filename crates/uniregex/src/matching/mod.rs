//! # Matcher API
//!
//! [`compile`] produces a [`Regex`]; [`check`], [`split`], [`scan`] and
//! [`replace`] consume one. Each operation is also a method on [`Regex`].

mod match_model;
mod regex_handle;
mod replace;
mod scan;
mod split;

#[doc(inline)]
pub use match_model::Match;
#[doc(inline)]
pub use regex_handle::{Regex, RegexHandle, compile, compile_with, from_string};
#[doc(inline)]
pub use replace::{replace, replace_map};
#[doc(inline)]
pub use scan::{check, scan};
#[doc(inline)]
pub use split::split;
