//! Centralized constants for the hotkeys workspace.
//!
//! This module contains default values used across crates to avoid
//! duplicating literals between the loader, the linters and the binary.

// =============================================================================
// Output Defaults
// =============================================================================

/// Default location of the generated hot keys document, relative to the
/// working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "docs/hotkeys.md";

/// Name of the generator, written into the document banner.
pub const GENERATOR_NAME: &str = "generate-hotkeys";

// =============================================================================
// Lint Policy Defaults
// =============================================================================

/// Punctuation allowed in help text in addition to ASCII letters and spaces.
pub const DEFAULT_ALLOWED_PUNCTUATION: &str = "/()',&@#:_-";

/// Key combinations that may be bound to several actions of one category.
pub const DEFAULT_EXEMPT_KEYS: &[&str] = &["q", "e", "m", "r"];

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the output document path.
pub const ENV_OUTPUT: &str = "HOTKEYS_OUTPUT";

/// Path to a JSON key table used instead of the built-in table.
pub const ENV_TABLE: &str = "HOTKEYS_TABLE";

/// Comma-separated exempt key combinations (replaces the defaults).
pub const ENV_EXEMPT_KEYS: &str = "HOTKEYS_EXEMPT_KEYS";

/// Allowed help text punctuation (replaces the defaults).
pub const ENV_ALLOWED_PUNCTUATION: &str = "HOTKEYS_ALLOWED_PUNCTUATION";
