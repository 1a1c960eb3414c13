//! Configuration and key-binding table types for the hotkeys generator.
//!
//! This crate provides the typed key-binding table consumed by the document
//! generator, the application's built-in table, lint policy settings, and a
//! loader that resolves configuration from `.env`, environment variables and
//! explicit overrides.

pub mod builtin;
pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, DocsConfig, env_var_or_none, read_table_file};
pub use types::{Action, CategoryTitle, KeyBindingTable, LintPolicy, TableError};
