//! # CLI Error Type
//!
//! The single error type returned by every command.
//!
//! ## Error Translation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CoreError ("Height must be positive")     ──► CliError::Core          │
//! │  ValidationError ("age must be ...")       ──► CliError::Validation    │
//! │  unreadable / malformed config.toml        ──► CliError::Config*       │
//! │  `--add pears` (no quantity)               ──► CliError::InvalidArg... │
//! │                                                                         │
//! │  main() prints the Display message to stderr and exits with code 1     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use recap_core::{CoreError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// A core utility rejected its input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// User input is outside the exercise's bounds.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A command-line argument could not be interpreted.
    #[error("Invalid argument '{value}': {reason}")]
    InvalidArgument { value: String, reason: String },

    /// The config file exists but could not be read.
    #[error("Cannot read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Result could not be encoded as JSON.
    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for command results.
pub type CliResult<T> = Result<T, CliError>;
