//! Grouping of key-binding table entries by category.
//!
//! Responsibilities:
//! - Bucket actions under their category, in category declaration order.
//!
//! Does NOT handle:
//! - Rendering or linting the groups.
//!
//! Invariants:
//! - Group order follows the table's category titles, not first appearance.
//! - Entry order within a group follows the table's action order.
//! - Every action lands in exactly one group; an undeclared category is fatal.

use std::collections::BTreeMap;

use hotkeys_config::KeyBindingTable;

use crate::error::DocsError;

/// One row of a category section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub help_text: &'a str,
    pub keys: &'a [String],
}

/// The entries of one category, borrowed from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub entries: Vec<Entry<'a>>,
}

/// Group the table's actions by category.
///
/// Categories without actions are kept as empty groups so every declared
/// title appears in the document.
pub fn group_by_category(table: &KeyBindingTable) -> Result<Vec<CategoryGroup<'_>>, DocsError> {
    let mut groups: Vec<CategoryGroup<'_>> = table
        .categories()
        .iter()
        .map(|category| CategoryGroup {
            id: &category.id,
            title: &category.title,
            entries: Vec::new(),
        })
        .collect();

    let slots: BTreeMap<&str, usize> = groups
        .iter()
        .enumerate()
        .map(|(slot, group)| (group.id, slot))
        .collect();

    for action in table.actions() {
        let Some(&slot) = slots.get(action.key_category.as_str()) else {
            return Err(DocsError::UnknownCategory {
                action: action.id.clone(),
                category: action.key_category.clone(),
            });
        };
        groups[slot].entries.push(Entry {
            help_text: &action.help_text,
            keys: &action.keys,
        });
    }

    tracing::debug!(
        categories = groups.len(),
        actions = table.actions().len(),
        "Grouped key bindings by category"
    );
    Ok(groups)
}
