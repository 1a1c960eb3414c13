//! The key-binding table: ordered actions and category titles.
//!
//! Responsibilities:
//! - Model actions and category titles as typed records.
//! - Validate structural invariants when a table is constructed or deserialized.
//!
//! Does NOT handle:
//! - Referential integrity between actions and category titles. The grouper
//!   reports unknown categories as a fatal error when it walks the table.
//!
//! Invariants:
//! - Action ids and category ids are unique within a table.
//! - Every action has at least one non-blank key combination.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural errors detected while constructing a [`KeyBindingTable`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Action '{action}' has no key combinations")]
    EmptyKeys { action: String },

    #[error("Action '{action}' has a blank key combination")]
    BlankKey { action: String },

    #[error("Action '{0}' is declared more than once")]
    DuplicateAction(String),

    #[error("Category '{0}' is declared more than once")]
    DuplicateCategory(String),
}

/// A single bindable command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Stable identifier, e.g. `GO_BACK`.
    pub id: String,
    /// Description shown to users.
    pub help_text: String,
    /// Identifier of the category this action is listed under.
    pub key_category: String,
    /// Alternative key combinations. Keys inside one combination are
    /// separated by whitespace (`"g n"` is `g` followed by `n`).
    pub keys: Vec<String>,
}

impl Action {
    pub fn new(
        id: impl Into<String>,
        help_text: impl Into<String>,
        key_category: impl Into<String>,
        keys: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            help_text: help_text.into(),
            key_category: key_category.into(),
            keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Display title for a category identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTitle {
    pub id: String,
    pub title: String,
}

impl CategoryTitle {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

#[derive(Deserialize)]
struct RawKeyBindingTable {
    categories: Vec<CategoryTitle>,
    actions: Vec<Action>,
}

impl TryFrom<RawKeyBindingTable> for KeyBindingTable {
    type Error = TableError;

    fn try_from(raw: RawKeyBindingTable) -> Result<Self, Self::Error> {
        Self::new(raw.categories, raw.actions)
    }
}

/// The single source of truth for key bindings.
///
/// Category order defines section order in the generated document; action
/// order defines row order within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawKeyBindingTable")]
pub struct KeyBindingTable {
    categories: Vec<CategoryTitle>,
    actions: Vec<Action>,
}

impl KeyBindingTable {
    /// Build a table, validating its structural invariants.
    pub fn new(categories: Vec<CategoryTitle>, actions: Vec<Action>) -> Result<Self, TableError> {
        let mut category_ids = BTreeSet::new();
        for category in &categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(TableError::DuplicateCategory(category.id.clone()));
            }
        }

        let mut action_ids = BTreeSet::new();
        for action in &actions {
            if !action_ids.insert(action.id.as_str()) {
                return Err(TableError::DuplicateAction(action.id.clone()));
            }
            if action.keys.is_empty() {
                return Err(TableError::EmptyKeys {
                    action: action.id.clone(),
                });
            }
            if action.keys.iter().any(|k| k.trim().is_empty()) {
                return Err(TableError::BlankKey {
                    action: action.id.clone(),
                });
            }
        }

        Ok(Self {
            categories,
            actions,
        })
    }

    /// Category titles in declaration order.
    pub fn categories(&self) -> &[CategoryTitle] {
        &self.categories
    }

    /// Actions in declaration order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Look up the display title of a category.
    pub fn category_title(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.title.as_str())
    }

    /// Look up an action by id.
    pub fn action(&self, id: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Return a copy of this table with one action's help text replaced.
    ///
    /// Returns `None` when no action has the given id.
    pub fn with_help_text(&self, id: &str, help_text: impl Into<String>) -> Option<Self> {
        let mut table = self.clone();
        let action = table.actions.iter_mut().find(|a| a.id == id)?;
        action.help_text = help_text.into();
        Some(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<CategoryTitle> {
        vec![
            CategoryTitle::new("general", "General"),
            CategoryTitle::new("navigation", "Navigation"),
        ]
    }

    #[test]
    fn new_preserves_declaration_order() {
        let table = KeyBindingTable::new(
            categories(),
            vec![
                Action::new("QUIT", "Quit", "general", &["ctrl c"]),
                Action::new("GO_UP", "Go up", "navigation", &["up", "k"]),
                Action::new("HELP", "Show/hide help menu", "general", &["?"]),
            ],
        )
        .unwrap();

        let ids: Vec<_> = table.actions().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["QUIT", "GO_UP", "HELP"]);
        assert_eq!(table.category_title("navigation"), Some("Navigation"));
        assert_eq!(table.category_title("missing"), None);
    }

    #[test]
    fn new_rejects_action_without_keys() {
        let err = KeyBindingTable::new(
            categories(),
            vec![Action::new("QUIT", "Quit", "general", &[])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TableError::EmptyKeys {
                action: "QUIT".to_string()
            }
        );
    }

    #[test]
    fn new_rejects_blank_key_combination() {
        let err = KeyBindingTable::new(
            categories(),
            vec![Action::new("QUIT", "Quit", "general", &["q", "  "])],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::BlankKey { .. }));
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = KeyBindingTable::new(
            categories(),
            vec![
                Action::new("QUIT", "Quit", "general", &["q"]),
                Action::new("QUIT", "Quit again", "general", &["Q"]),
            ],
        )
        .unwrap_err();
        assert_eq!(err, TableError::DuplicateAction("QUIT".to_string()));

        let mut duplicated = categories();
        duplicated.push(CategoryTitle::new("general", "General again"));
        let err = KeyBindingTable::new(duplicated, Vec::new()).unwrap_err();
        assert_eq!(err, TableError::DuplicateCategory("general".to_string()));
    }

    #[test]
    fn unknown_category_is_not_a_structural_error() {
        let table = KeyBindingTable::new(
            categories(),
            vec![Action::new("X", "Something", "elsewhere", &["x"])],
        );
        assert!(table.is_ok());
    }

    #[test]
    fn deserialize_validates_invariants() {
        let json = r#"{
            "categories": [{"id": "general", "title": "General"}],
            "actions": [
                {"id": "HELP", "help_text": "Show help", "key_category": "general", "keys": []}
            ]
        }"#;
        let err = serde_json::from_str::<KeyBindingTable>(json).unwrap_err();
        assert!(err.to_string().contains("has no key combinations"));
    }

    #[test]
    fn with_help_text_replaces_single_action() {
        let table = KeyBindingTable::new(
            categories(),
            vec![Action::new("QUIT", "Quit", "general", &["q"])],
        )
        .unwrap();

        let edited = table.with_help_text("QUIT", "Exit").unwrap();
        assert_eq!(edited.action("QUIT").unwrap().help_text, "Exit");
        assert_eq!(table.action("QUIT").unwrap().help_text, "Quit");
        assert!(table.with_help_text("MISSING", "x").is_none());
    }
}
