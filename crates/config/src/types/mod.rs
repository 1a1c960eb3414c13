//! Type definitions for the key-binding table and lint configuration.
//!
//! Responsibilities:
//! - Define typed `Action` and `CategoryTitle` records and the ordered `KeyBindingTable`.
//! - Define `LintPolicy`, the explicit configuration passed into the linters.
//!
//! Does NOT handle:
//! - Loading tables or policies from files or the environment (see `loader` module).
//! - Grouping, rendering or linting (see the docs crate).
//!
//! Invariants:
//! - Declaration order of categories and actions is preserved exactly.
//! - A constructed `KeyBindingTable` never contains an action without keys.

mod policy;
mod table;

pub use policy::LintPolicy;
pub use table::{Action, CategoryTitle, KeyBindingTable, TableError};
