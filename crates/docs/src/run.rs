//! Generate and check operations.
//!
//! Responsibilities:
//! - `generate`: render the table and overwrite the persisted document.
//! - `check`: lint the table and verify the persisted document without writing.
//!
//! Does NOT handle:
//! - Printing reports or parsing flags (see the `generate-hotkeys` binary).
//!
//! Invariants:
//! - Lint findings fail a check even when the document is in sync.
//! - `check` never writes; `generate` always writes.

use std::path::Path;

use hotkeys_config::{KeyBindingTable, LintPolicy};

use crate::error::{DocsError, ExitCode};
use crate::group::group_by_category;
use crate::lint::{LintReport, lint_table};
use crate::render::render_document;
use crate::sync::{SyncStatus, check_sync, read_persisted, write_document};

/// Render the full document for a table.
pub fn render_table(table: &KeyBindingTable) -> Result<String, DocsError> {
    let groups = group_by_category(table)?;
    Ok(render_document(&groups))
}

/// Regenerate the document at `path`.
///
/// Returns the sync status observed before writing. The status is
/// informational; the document is overwritten either way.
pub fn generate(table: &KeyBindingTable, path: &Path) -> Result<SyncStatus, DocsError> {
    let rendered = render_table(table)?;
    let persisted = read_persisted(path)?;
    let status = check_sync(&rendered, persisted.as_deref());

    tracing::info!(path = %path.display(), ?status, "Sync status before regeneration");
    write_document(path, &rendered)?;
    Ok(status)
}

/// Outcome of a check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub lint: LintReport,
    /// Only computed when linting produced no findings.
    pub sync: Option<SyncStatus>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.lint.is_clean() && self.sync == Some(SyncStatus::InSync)
    }

    pub fn exit_code(&self) -> ExitCode {
        if !self.lint.is_clean() {
            ExitCode::LintFailed
        } else if self.sync == Some(SyncStatus::InSync) {
            ExitCode::Success
        } else {
            ExitCode::OutOfSync
        }
    }
}

/// Lint the table and compare the persisted document at `path` with a fresh
/// rendering.
pub fn check(
    table: &KeyBindingTable,
    policy: &LintPolicy,
    path: &Path,
) -> Result<CheckReport, DocsError> {
    let groups = group_by_category(table)?;
    let rendered = render_document(&groups);
    let lint = lint_table(&groups, policy)?;

    if !lint.is_clean() {
        tracing::warn!(findings = lint.len(), "Key table has lint findings");
        return Ok(CheckReport { lint, sync: None });
    }

    let persisted = read_persisted(path)?;
    let status = check_sync(&rendered, persisted.as_deref());
    if status == SyncStatus::OutOfSync {
        tracing::warn!(path = %path.display(), "Hot keys document is out of sync");
    }

    Ok(CheckReport {
        lint,
        sync: Some(status),
    })
}
