//! # `uniregex` Regular Expressions
//!
//! A small, engine-agnostic regular expression API.
//!
//! Matching is delegated to an engine collaborator (see [`engine`]);
//! this crate owns the data model and the semantics:
//!
//! * [`compile`] a pattern with [`Options`] into a [`Regex`],
//!   or fail with a [`CompileError`].
//! * [`check`] whether a text contains a match.
//! * [`split`] a text at every match.
//! * [`scan`] a text for every [`Match`], with capture groups.
//! * [`replace`] the first, or every, match with literal text.
//!
//! All of these behave identically on every [`EngineKind`].
//!
//! ```rust
//! use uniregex::{Options, compile};
//!
//! let re = compile(r"(a)?b", Options::default())?;
//! let found = re.scan("b ab");
//! assert_eq!(found[0].submatches, vec![None]);
//! assert_eq!(found[1].submatches, vec![Some("a".to_string())]);
//!
//! assert_eq!(re.split("xbyabz"), vec!["x", "y", "z"]);
//! assert_eq!(re.replace("b ab", "_", true), "_ _");
//! # Ok::<(), uniregex::CompileError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod engine;
pub mod errors;
pub mod matching;
pub mod options;

#[doc(inline)]
pub use engine::{EngineKind, alternate_choice_pattern, escape};
#[doc(inline)]
pub use errors::{CompileError, CompileResult};
#[doc(inline)]
pub use matching::{
    Match,
    Regex,
    RegexHandle,
    check,
    compile,
    compile_with,
    from_string,
    replace,
    replace_map,
    scan,
    split,
};
#[doc(inline)]
pub use options::Options;
