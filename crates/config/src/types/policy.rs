//! Lint policy settings.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ALLOWED_PUNCTUATION, DEFAULT_EXEMPT_KEYS};

/// Settings consumed by the help text and duplicate key linters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintPolicy {
    /// Characters allowed in help text besides ASCII letters and spaces.
    pub allowed_punctuation: String,
    /// Key combinations that may repeat within a single category.
    pub exempt_keys: Vec<String>,
}

impl Default for LintPolicy {
    fn default() -> Self {
        Self {
            allowed_punctuation: DEFAULT_ALLOWED_PUNCTUATION.to_string(),
            exempt_keys: DEFAULT_EXEMPT_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl LintPolicy {
    pub fn with_exempt_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exempt_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_allowed_punctuation(mut self, punctuation: impl Into<String>) -> Self {
        self.allowed_punctuation = punctuation.into();
        self
    }

    /// Whether a key combination is allowed to repeat within a category.
    pub fn is_exempt(&self, key_combination: &str) -> bool {
        self.exempt_keys.iter().any(|k| k == key_combination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_constants() {
        let policy = LintPolicy::default();
        assert_eq!(policy.allowed_punctuation, "/()',&@#:_-");
        assert!(policy.is_exempt("q"));
        assert!(policy.is_exempt("r"));
        assert!(!policy.is_exempt("x"));
    }

    #[test]
    fn with_exempt_keys_replaces_defaults() {
        let policy = LintPolicy::default().with_exempt_keys(["x"]);
        assert!(policy.is_exempt("x"));
        assert!(!policy.is_exempt("q"));
    }

    #[test]
    fn exempt_keys_match_whole_combinations() {
        let policy = LintPolicy::default().with_exempt_keys(["g n"]);
        assert!(policy.is_exempt("g n"));
        assert!(!policy.is_exempt("g"));
    }
}
