//! JSON key table files.
//!
//! Responsibilities:
//! - Read a key table from a JSON file and validate it.
//!
//! Does NOT handle:
//! - Referential integrity of categories (checked by the grouper).

use std::path::Path;

use super::error::ConfigError;
use crate::types::KeyBindingTable;

/// Read and validate a key table from a JSON file.
///
/// The file holds `{"categories": [...], "actions": [...]}` in document order.
pub fn read_table_file(path: &Path) -> Result<KeyBindingTable, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TableFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let table: KeyBindingTable =
        serde_json::from_str(&content).map_err(|e| ConfigError::TableFileParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(
        path = %path.display(),
        categories = table.categories().len(),
        actions = table.actions().len(),
        "Loaded key table file"
    );
    Ok(table)
}
