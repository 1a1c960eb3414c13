//! Help text style gate.

use hotkeys_config::LintPolicy;
use regex::Regex;

use super::Finding;
use crate::error::DocsError;
use crate::group::CategoryGroup;
use crate::render::{render_key_combinations, strip_key_markers};

/// Compiled help text policy: ASCII letters, spaces and the allowed punctuation.
#[derive(Debug, Clone)]
pub struct HelpTextPolicy {
    pattern: Regex,
}

impl HelpTextPolicy {
    pub fn new(policy: &LintPolicy) -> Result<Self, DocsError> {
        let pattern = Regex::new(&format!(
            "^[a-zA-Z {}]*$",
            regex::escape(&policy.allowed_punctuation)
        ))?;
        Ok(Self { pattern })
    }

    pub fn allows(&self, help_text: &str) -> bool {
        self.pattern.is_match(help_text)
    }
}

/// Check every entry's help text and collect a finding per violation.
pub fn lint_help_text(groups: &[CategoryGroup<'_>], policy: &HelpTextPolicy) -> Vec<Finding> {
    groups
        .iter()
        .flat_map(|group| {
            group
                .entries
                .iter()
                .filter(|entry| !policy.allows(entry.help_text))
                .map(|entry| Finding::Style {
                    category: group.title.to_string(),
                    help_text: entry.help_text.to_string(),
                    keys: strip_key_markers(&render_key_combinations(entry.keys)),
                })
        })
        .collect()
}
