//! Error types and process exit codes.
//!
//! Responsibilities:
//! - Define fatal errors raised while grouping, linting or touching the document.
//! - Define the structured exit codes returned by `generate-hotkeys`.
//!
//! Does NOT handle:
//! - Lint findings or sync status. Those are values collected into reports,
//!   never errors.
//!
//! Invariants:
//! - Exit code 0 is returned only when every check passed.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a generator run.
#[derive(Debug, Error)]
pub enum DocsError {
    /// An action references a category with no declared title.
    #[error("Action '{action}' references undeclared category '{category}'")]
    UnknownCategory { action: String, category: String },

    #[error("Invalid help text policy: {0}")]
    InvalidPolicy(#[from] regex::Error),

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Structured exit codes for generate-hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Document generated, or check passed.
    Success = 0,

    /// Integrity, configuration or I/O failure.
    GeneralError = 1,

    /// Help text or duplicate key findings were reported.
    LintFailed = 2,

    /// The persisted document does not match the table.
    OutOfSync = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}
