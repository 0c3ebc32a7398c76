//! Configuration errors.

use super::error_code::{self, RefitErrorCode};

/// Errors that can occur while loading or validating a recipe configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid config value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Config file not found: {path}")]
    FileNotFound { path: String },
}

impl RefitErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
