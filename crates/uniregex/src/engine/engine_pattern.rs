//! # Engine Pattern Labels

use crate::{
    Options,
    engine::{EngineError, EngineRegex},
};

/// Which engine compiles a pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EngineKind {
    /// The `regex` crate; linear-time, no look-around or backreferences.
    Basic,

    /// The `fancy_regex` crate; backtracking extensions.
    Fancy,

    /// Try [`EngineKind::Basic`]; then fall up to [`EngineKind::Fancy`].
    #[default]
    Adaptive,
}

/// Labeled wrapper for regex patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EnginePattern {
    /// This is a pattern for the `regex` crate.
    Basic(String),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(String),

    /// This pattern will try the `regex` crate first,
    /// and fallback to `fancy_regex` if it fails.
    Adaptive(String),
}

impl<S: AsRef<str>> From<S> for EnginePattern {
    fn from(pattern: S) -> Self {
        Self::Adaptive(pattern.as_ref().to_string())
    }
}

impl EnginePattern {
    /// Label a pattern with an engine kind.
    pub fn new<S: Into<String>>(
        kind: EngineKind,
        pattern: S,
    ) -> Self {
        let pattern = pattern.into();
        match kind {
            EngineKind::Basic => Self::Basic(pattern),
            EngineKind::Fancy => Self::Fancy(pattern),
            EngineKind::Adaptive => Self::Adaptive(pattern),
        }
    }

    /// The requested engine kind.
    pub fn kind(&self) -> EngineKind {
        match self {
            Self::Basic(_) => EngineKind::Basic,
            Self::Fancy(_) => EngineKind::Fancy,
            Self::Adaptive(_) => EngineKind::Adaptive,
        }
    }

    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the pattern into an [`EngineRegex`].
    ///
    /// ## Arguments
    /// * `options` - the compile options, applied identically on both engines.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `EngineRegex` or an `EngineError`.
    pub fn compile(
        &self,
        options: &Options,
    ) -> Result<EngineRegex, EngineError> {
        match self {
            Self::Basic(pattern) => compile_basic(pattern, options),
            Self::Fancy(pattern) => compile_fancy(pattern, options),
            Self::Adaptive(pattern) => compile_basic(pattern, options).or_else(|err| {
                log::trace!("basic engine rejected {pattern:?} ({err}); trying fancy engine");
                compile_fancy(pattern, options)
            }),
        }
    }
}

fn compile_basic(
    pattern: &str,
    options: &Options,
) -> Result<EngineRegex, EngineError> {
    regex::RegexBuilder::new(pattern)
        .case_insensitive(options.case_insensitive)
        .multi_line(options.multi_line)
        .build()
        .map(EngineRegex::from)
        .map_err(EngineError::from)
}

fn compile_fancy(
    pattern: &str,
    options: &Options,
) -> Result<EngineRegex, EngineError> {
    // Flags go inline; `EngineError::byte_index` strips the prefix again.
    let source = format!("{}{}", options.inline_flags(), pattern);
    fancy_regex::Regex::new(&source)
        .map(EngineRegex::from)
        .map_err(EngineError::from)
}
