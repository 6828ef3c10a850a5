//! # Error Types

use crate::{Options, engine::EngineError};

/// A pattern failed to compile.
///
/// `byte_index` is a best-effort location: engines disagree on how they
/// report positions, so only "somewhere near here, inside the pattern"
/// is portable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{error} (at byte {byte_index})")]
pub struct CompileError {
    /// The engine's human-readable message.
    pub error: String,

    /// Offset into the pattern where compilation failed.
    pub byte_index: usize,
}

impl CompileError {
    /// Normalize an engine error against the pattern that produced it.
    ///
    /// ## Arguments
    /// * `err` - the engine error.
    /// * `pattern` - the pattern as given to compile.
    /// * `options` - the options it was compiled with.
    pub fn from_engine(
        err: &EngineError,
        pattern: &str,
        options: &Options,
    ) -> Self {
        Self {
            error: err.message(pattern, options),
            byte_index: err.byte_index(pattern, options),
        }
    }
}

/// Result type for compile operations.
pub type CompileResult<T> = core::result::Result<T, CompileError>;
