//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Convert structural table errors into configuration errors.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).
//! - Dotenv errors NEVER include raw .env line contents.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::TableError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Invalid key table: {0}")]
    InvalidTable(#[from] TableError),

    #[error("Failed to read key table at {path}: {source}")]
    TableFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse key table at {path}: {source}")]
    TableFileParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the failure is kept, never the offending line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
