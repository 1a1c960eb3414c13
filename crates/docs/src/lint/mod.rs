//! Consistency linting for the key-binding table.
//!
//! Responsibilities:
//! - Collect help text style findings and duplicate key findings into one report.
//!
//! Does NOT handle:
//! - Printing findings or choosing exit codes (see the binary and `run`).
//!
//! Invariants:
//! - Linting never aborts on a finding; every entry is checked.
//! - The report passes iff it holds no findings.

mod duplicates;
mod style;

use std::fmt;

use hotkeys_config::LintPolicy;

pub use duplicates::lint_duplicate_keys;
pub use style::{HelpTextPolicy, lint_help_text};

use crate::error::DocsError;
use crate::group::CategoryGroup;

/// The kind of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    Style,
    DuplicateKey,
}

/// A recorded lint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Help text contains characters outside the allowed policy.
    Style {
        category: String,
        help_text: String,
        /// Rendered key combinations with `<kbd>` markers stripped.
        keys: String,
    },
    /// Key combinations bound more than once within one category.
    DuplicateKey { category: String, keys: Vec<String> },
}

impl Finding {
    pub fn kind(&self) -> FindingKind {
        match self {
            Self::Style { .. } => FindingKind::Style,
            Self::DuplicateKey { .. } => FindingKind::DuplicateKey,
        }
    }

    /// Title of the category the finding belongs to.
    pub fn category(&self) -> &str {
        match self {
            Self::Style { category, .. } | Self::DuplicateKey { category, .. } => category,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style {
                category,
                help_text,
                keys,
            } => write!(
                f,
                "Help text '{help_text}' in category ({category}) for key combination ({keys}) contains invalid characters"
            ),
            Self::DuplicateKey { category, keys } => write!(
                f,
                "Duplicate key combination for keys [{}] in category ({category})",
                keys.join(", ")
            ),
        }
    }
}

/// All findings of one lint run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub findings: Vec<Finding>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter()
    }

    pub fn of_kind(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind() == kind)
    }
}

/// Run both linters over the grouped table.
pub fn lint_table(
    groups: &[CategoryGroup<'_>],
    policy: &LintPolicy,
) -> Result<LintReport, DocsError> {
    let help_policy = HelpTextPolicy::new(policy)?;

    let mut findings = lint_help_text(groups, &help_policy);
    findings.extend(lint_duplicate_keys(groups, policy));

    if !findings.is_empty() {
        tracing::debug!(findings = findings.len(), "Lint reported findings");
    }
    Ok(LintReport { findings })
}
