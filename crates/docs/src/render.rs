//! Markdown rendering of the hot keys document.
//!
//! Responsibilities:
//! - Render grouped key bindings into the canonical `docs/hotkeys.md` text.
//! - Format key combinations as `<kbd>` markers and strip them for diagnostics.
//!
//! Non-responsibilities:
//! - Reading or writing files (see `sync`).
//! - Validating help text (see `lint`).
//!
//! Invariants:
//! - Output is a pure function of the groups: byte-identical across runs.
//! - The first two lines are the generated-file banner.

use hotkeys_config::constants::GENERATOR_NAME;

use crate::group::CategoryGroup;

const KEY_SEPARATOR: &str = " + ";
const COMBINATION_SEPARATOR: &str = " / ";

/// The two-line banner marking the document as generated, plus a blank line.
pub fn banner() -> String {
    format!("<!--- Generated automatically by {GENERATOR_NAME} -->\n<!--- Do not modify -->\n\n")
}

/// Render the complete document.
pub fn render_document(groups: &[CategoryGroup<'_>]) -> String {
    let mut out = banner();
    out.push_str("# Hot Keys\n");

    for group in groups {
        out.push_str(&format!("## {}\n", group.title));
        out.push_str("|Command|Key Combination|\n");
        out.push_str("| :--- | :---: |\n");
        for entry in &group.entries {
            out.push_str(&format!(
                "|{}|{}|\n",
                entry.help_text,
                render_key_combinations(entry.keys)
            ));
        }
        out.push('\n');
    }

    tracing::debug!(bytes = out.len(), "Rendered hot keys document");
    out
}

/// Render alternative key combinations for one action.
///
/// `["g n", "G N"]` becomes
/// `<kbd>g</kbd> + <kbd>n</kbd> / <kbd>G</kbd> + <kbd>N</kbd>`.
pub fn render_key_combinations(keys: &[String]) -> String {
    keys.iter()
        .map(|combination| {
            combination
                .split_whitespace()
                .map(|key| format!("<kbd>{key}</kbd>"))
                .collect::<Vec<_>>()
                .join(KEY_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join(COMBINATION_SEPARATOR)
}

/// Remove `<kbd>` markers from a rendered key cell.
pub fn strip_key_markers(rendered: &str) -> String {
    rendered.replace("<kbd>", "").replace("</kbd>", "")
}
