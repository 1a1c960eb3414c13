//! Configuration loader builder.
//!
//! Responsibilities:
//! - Collect configuration from `.env`, environment variables and explicit overrides.
//! - Build the final `DocsConfig` with defaults applied.
//!
//! Does NOT handle:
//! - Environment variable parsing details (see env.rs).
//! - Key table file parsing (see table_file.rs).
//!
//! Invariants:
//! - `load_dotenv()` checks `DOTENV_DISABLED` before calling `dotenvy::dotenv()`.
//! - A missing `.env` file is not an error.
//! - Unset values fall back to the defaults in `constants.rs`.

use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use super::table_file::read_table_file;
use crate::builtin;
use crate::constants::DEFAULT_OUTPUT_PATH;
use crate::types::{KeyBindingTable, LintPolicy};

/// Resolved configuration for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsConfig {
    /// Where the hot keys document is read from and written to.
    pub output_path: PathBuf,
    /// JSON key table to use instead of the built-in table.
    pub table_path: Option<PathBuf>,
    /// Policy passed to the linters.
    pub policy: LintPolicy,
}

impl DocsConfig {
    /// Load the key table this configuration points at.
    ///
    /// Falls back to the built-in table when no table file is configured.
    pub fn load_table(&self) -> Result<KeyBindingTable, ConfigError> {
        match &self.table_path {
            Some(path) => read_table_file(path),
            None => Ok(builtin::key_table()?),
        }
    }
}

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    output_path: Option<PathBuf>,
    table_path: Option<PathBuf>,
    exempt_keys: Option<Vec<String>>,
    allowed_punctuation: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(err, dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax or
    /// cannot be read. Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Apply `HOTKEYS_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    pub fn with_table_path(mut self, path: PathBuf) -> Self {
        self.table_path = Some(path);
        self
    }

    pub fn with_exempt_keys(mut self, keys: Vec<String>) -> Self {
        self.exempt_keys = Some(keys);
        self
    }

    pub fn with_allowed_punctuation(mut self, punctuation: String) -> Self {
        self.allowed_punctuation = Some(punctuation);
        self
    }

    pub(crate) fn set_output_path(&mut self, path: Option<PathBuf>) {
        self.output_path = path;
    }

    pub(crate) fn set_table_path(&mut self, path: Option<PathBuf>) {
        self.table_path = path;
    }

    pub(crate) fn set_exempt_keys(&mut self, keys: Option<Vec<String>>) {
        self.exempt_keys = keys;
    }

    pub(crate) fn set_allowed_punctuation(&mut self, punctuation: Option<String>) {
        self.allowed_punctuation = punctuation;
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when an exempt key is blank or the
    /// allowed punctuation contains letters or whitespace.
    pub fn build(self) -> Result<DocsConfig, ConfigError> {
        let mut policy = LintPolicy::default();

        if let Some(keys) = self.exempt_keys {
            if keys.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    var: "exempt_keys".to_string(),
                    message: "key combinations must not be blank".to_string(),
                });
            }
            policy = policy.with_exempt_keys(keys);
        }

        if let Some(punctuation) = self.allowed_punctuation {
            if punctuation
                .chars()
                .any(|c| c.is_alphanumeric() || c.is_whitespace())
            {
                return Err(ConfigError::InvalidValue {
                    var: "allowed_punctuation".to_string(),
                    message: "must contain punctuation characters only".to_string(),
                });
            }
            policy = policy.with_allowed_punctuation(punctuation);
        }

        Ok(DocsConfig {
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            table_path: self.table_path,
            policy,
        })
    }
}
