//! Shared test utilities for generate-hotkeys integration tests.
//!
//! Invariants / Assumptions:
//! - Commands are hermetic: no `.env` loading and no `HOTKEYS_*` leakage from the host.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use hotkeys_config::{Action, CategoryTitle, KeyBindingTable};

/// Returns a hermetic `generate-hotkeys` command.
pub fn hotkeys_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("generate-hotkeys");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("HOTKEYS_OUTPUT")
        .env_remove("HOTKEYS_TABLE")
        .env_remove("HOTKEYS_EXEMPT_KEYS")
        .env_remove("HOTKEYS_ALLOWED_PUNCTUATION");

    cmd
}

/// A small two-category table.
pub fn sample_table() -> KeyBindingTable {
    KeyBindingTable::new(
        vec![
            CategoryTitle::new("general", "General"),
            CategoryTitle::new("navigation", "Navigation"),
        ],
        vec![
            Action::new("HELP", "Show/hide help menu", "general", &["?"]),
            Action::new("GO_UP", "Go up / Previous message", "navigation", &["up", "k"]),
            Action::new("NEXT_UNREAD", "Next unread topic", "navigation", &["g n", "G N"]),
            Action::new("OPEN_DRAFT", "Open draft (new)", "general", &["d"]),
        ],
    )
    .unwrap()
}

/// Write a table as JSON and return its path.
pub fn write_table(dir: &Path, table: &KeyBindingTable) -> PathBuf {
    let path = dir.join("keys.json");
    std::fs::write(&path, serde_json::to_string_pretty(table).unwrap()).unwrap();
    path
}
