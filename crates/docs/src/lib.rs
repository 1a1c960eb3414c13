//! Hot keys document generation and linting.
//!
//! This crate turns a [`hotkeys_config::KeyBindingTable`] into the canonical
//! `docs/hotkeys.md` document, lints the table for malformed help text and
//! duplicate key assignments, and checks that the persisted document matches
//! what the table would produce.

pub mod error;
pub mod group;
pub mod lint;
pub mod render;
pub mod run;
pub mod sync;

pub use error::{DocsError, ExitCode};
pub use group::{CategoryGroup, Entry, group_by_category};
pub use lint::{Finding, FindingKind, LintReport, lint_table};
pub use render::{render_document, render_key_combinations, strip_key_markers};
pub use run::{CheckReport, check, generate, render_table};
pub use sync::{SyncStatus, check_sync, read_persisted, write_document};
