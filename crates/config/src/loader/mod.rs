//! Configuration loader for environment variables and key table files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables and explicit overrides.
//! - Provide a builder-pattern `ConfigLoader` producing a `DocsConfig`.
//! - Read JSON key tables from disk.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Command-line parsing (the binary maps flags onto `with_*` overrides).
//! - Rendering, linting or writing documents (see the docs crate).
//!
//! Invariants / Assumptions:
//! - Explicit `with_*` overrides take precedence over environment variables.
//! - Environment variables take precedence over built-in defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod table_file;

pub use builder::{ConfigLoader, DocsConfig};
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use table_file::read_table_file;

#[cfg(test)]
mod tests;
