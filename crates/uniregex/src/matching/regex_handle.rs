//! # Compiled Regex Handle

use std::{str::FromStr, sync::Arc};

use crate::{
    Options,
    engine::{EngineKind, EnginePattern, EngineRegex},
    errors::{CompileError, CompileResult},
};

/// Common shared Regex handle type.
pub type RegexHandle = Arc<Regex>;

/// A compiled pattern.
///
/// Immutable after construction; safe to share across threads
/// and reuse for any number of inputs.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    options: Options,
    engine: EngineRegex,
}

impl PartialEq for Regex {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.pattern == other.pattern
            && self.options == other.options
            && self.engine_kind() == other.engine_kind()
    }
}

impl Eq for Regex {}

impl FromStr for Regex {
    type Err = CompileError;

    fn from_str(pattern: &str) -> CompileResult<Self> {
        from_string(pattern)
    }
}

impl core::fmt::Display for Regex {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl Regex {
    /// Compile `pattern` with the adaptive engine.
    ///
    /// ## Arguments
    /// * `pattern` - the pattern text; the empty pattern matches everywhere.
    /// * `options` - compile options.
    ///
    /// ## Returns
    /// The compiled `Regex`, or a `CompileError` describing the rejection.
    pub fn new(
        pattern: &str,
        options: Options,
    ) -> CompileResult<Self> {
        Self::with_engine(pattern, options, EngineKind::Adaptive)
    }

    /// Compile `pattern` on a specific engine.
    ///
    /// ## Arguments
    /// * `pattern` - the pattern text.
    /// * `options` - compile options.
    /// * `kind` - which engine to compile with.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug"))]
    pub fn with_engine(
        pattern: &str,
        options: Options,
        kind: EngineKind,
    ) -> CompileResult<Self> {
        let engine = EnginePattern::new(kind, pattern)
            .compile(&options)
            .map_err(|err| CompileError::from_engine(&err, pattern, &options))?;

        let regex = Self {
            pattern: pattern.to_string(),
            options,
            engine,
        };
        log::debug!(
            "compiled {:?} ({:?}) on {:?} engine",
            regex.pattern,
            regex.options,
            regex.engine_kind()
        );
        Ok(regex)
    }

    /// The source pattern, as given to compile.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The options this regex was compiled with.
    pub fn options(&self) -> Options {
        self.options
    }

    /// The engine that actually compiled this regex.
    ///
    /// ## Returns
    /// [`EngineKind::Basic`] or [`EngineKind::Fancy`]; never `Adaptive`.
    pub fn engine_kind(&self) -> EngineKind {
        match self.engine {
            EngineRegex::Basic(_) => EngineKind::Basic,
            EngineRegex::Fancy(_) => EngineKind::Fancy,
        }
    }

    /// The number of capture groups in the pattern.
    pub fn captures_len(&self) -> usize {
        self.engine.captures_len()
    }

    /// The underlying engine regex.
    pub fn engine(&self) -> &EngineRegex {
        &self.engine
    }

    /// Convert into a shared [`RegexHandle`].
    pub fn into_handle(self) -> RegexHandle {
        Arc::new(self)
    }
}

/// Compile `pattern` with `options`.
///
/// See [`Regex::new`].
pub fn compile(
    pattern: &str,
    options: Options,
) -> CompileResult<Regex> {
    Regex::new(pattern, options)
}

/// Compile `pattern` with `options` on a specific engine.
///
/// See [`Regex::with_engine`].
pub fn compile_with(
    pattern: &str,
    options: Options,
    kind: EngineKind,
) -> CompileResult<Regex> {
    Regex::with_engine(pattern, options, kind)
}

/// Compile `pattern` with default options.
pub fn from_string(pattern: &str) -> CompileResult<Regex> {
    Regex::new(pattern, Options::default())
}
