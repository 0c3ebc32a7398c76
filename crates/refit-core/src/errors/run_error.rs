//! Run-level errors. Per-declaration failures never surface here; they
//! downgrade to diagnostics and leave the declaration unchanged.

use super::error_code::{self, RefitErrorCode};
use super::ConfigError;

/// Errors that are fatal to a whole run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No compilation units supplied")]
    EmptyProgram,

    #[error("Run cancelled")]
    Cancelled,
}

impl RefitErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::EmptyProgram => error_code::EMPTY_PROGRAM,
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}
