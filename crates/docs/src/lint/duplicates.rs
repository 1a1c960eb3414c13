//! Duplicate key detection, scoped per category.

use std::collections::BTreeMap;

use hotkeys_config::LintPolicy;

use super::Finding;
use crate::group::CategoryGroup;

/// Report key combinations bound more than once within a category.
///
/// Each alternative combination counts on its own. Exempt combinations are
/// removed before counting, and the same combination in two different
/// categories is never a finding.
pub fn lint_duplicate_keys(groups: &[CategoryGroup<'_>], policy: &LintPolicy) -> Vec<Finding> {
    let mut findings = Vec::new();

    for group in groups {
        let combinations: Vec<&str> = group
            .entries
            .iter()
            .flat_map(|entry| entry.keys.iter())
            .map(String::as_str)
            .filter(|combination| !policy.is_exempt(combination))
            .collect();

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for combination in &combinations {
            *counts.entry(*combination).or_default() += 1;
        }

        let mut duplicates: Vec<String> = Vec::new();
        for combination in combinations {
            if counts[combination] > 1 && !duplicates.iter().any(|d| d == combination) {
                duplicates.push(combination.to_string());
            }
        }

        if !duplicates.is_empty() {
            findings.push(Finding::DuplicateKey {
                category: group.title.to_string(),
                keys: duplicates,
            });
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::Entry;

    fn keys(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn same_key_in_one_category_is_reported_once() {
        let x = keys(&["x"]);
        let groups = vec![CategoryGroup {
            id: "a",
            title: "Alpha",
            entries: vec![
                Entry {
                    help_text: "First",
                    keys: &x,
                },
                Entry {
                    help_text: "Second",
                    keys: &x,
                },
            ],
        }];

        let findings = lint_duplicate_keys(&groups, &LintPolicy::default());

        assert_eq!(
            findings,
            vec![Finding::DuplicateKey {
                category: "Alpha".to_string(),
                keys: vec!["x".to_string()],
            }]
        );
    }

    #[test]
    fn same_key_across_categories_is_allowed() {
        let x = keys(&["x"]);
        let groups = vec![
            CategoryGroup {
                id: "a",
                title: "Alpha",
                entries: vec![Entry {
                    help_text: "First",
                    keys: &x,
                }],
            },
            CategoryGroup {
                id: "b",
                title: "Beta",
                entries: vec![Entry {
                    help_text: "Second",
                    keys: &x,
                }],
            },
        ];

        assert!(lint_duplicate_keys(&groups, &LintPolicy::default()).is_empty());
    }

    #[test]
    fn exempt_keys_are_ignored() {
        let x = keys(&["x"]);
        let groups = vec![CategoryGroup {
            id: "a",
            title: "Alpha",
            entries: vec![
                Entry {
                    help_text: "First",
                    keys: &x,
                },
                Entry {
                    help_text: "Second",
                    keys: &x,
                },
            ],
        }];

        let policy = LintPolicy::default().with_exempt_keys(["x"]);
        assert!(lint_duplicate_keys(&groups, &policy).is_empty());
    }

    #[test]
    fn alternatives_count_separately_and_keep_first_appearance_order() {
        let first = keys(&["k", "up"]);
        let second = keys(&["j", "up"]);
        let third = keys(&["j"]);
        let groups = vec![CategoryGroup {
            id: "nav",
            title: "Navigation",
            entries: vec![
                Entry {
                    help_text: "Up",
                    keys: &first,
                },
                Entry {
                    help_text: "Down",
                    keys: &second,
                },
                Entry {
                    help_text: "Down again",
                    keys: &third,
                },
            ],
        }];

        let findings = lint_duplicate_keys(&groups, &LintPolicy::default());

        assert_eq!(
            findings,
            vec![Finding::DuplicateKey {
                category: "Navigation".to_string(),
                keys: vec!["up".to_string(), "j".to_string()],
            }]
        );
    }

    #[test]
    fn chord_is_compared_as_a_whole() {
        let chord = keys(&["g n"]);
        let single = keys(&["g"]);
        let groups = vec![CategoryGroup {
            id: "a",
            title: "Alpha",
            entries: vec![
                Entry {
                    help_text: "Chord",
                    keys: &chord,
                },
                Entry {
                    help_text: "Single",
                    keys: &single,
                },
            ],
        }];

        assert!(lint_duplicate_keys(&groups, &LintPolicy::default()).is_empty());
    }
}
