//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read hotkeys environment variables and apply them to a `ConfigLoader`.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - List values are comma-separated; blank items are dropped.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_ALLOWED_PUNCTUATION, ENV_EXEMPT_KEYS, ENV_OUTPUT, ENV_TABLE};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(path) = env_var_or_none(ENV_OUTPUT) {
        loader.set_output_path(Some(PathBuf::from(path)));
    }
    if let Some(path) = env_var_or_none(ENV_TABLE) {
        loader.set_table_path(Some(PathBuf::from(path)));
    }
    if let Some(raw) = env_var_or_none(ENV_EXEMPT_KEYS) {
        let keys = split_list(&raw);
        if keys.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: ENV_EXEMPT_KEYS.to_string(),
                message: "must list at least one key combination".to_string(),
            });
        }
        loader.set_exempt_keys(Some(keys));
    }
    if let Some(punctuation) = env_var_or_none(ENV_ALLOWED_PUNCTUATION) {
        loader.set_allowed_punctuation(Some(punctuation));
    }
    Ok(())
}
