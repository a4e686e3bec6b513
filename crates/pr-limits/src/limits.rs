//! Limit configuration
//!
//! Thresholds are optional. An absent or zero threshold disables its rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Open pull request limits in effect for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum open pull requests in the repository
    #[serde(default)]
    pub repo_limit: Option<u64>,

    /// Maximum open pull requests per author
    #[serde(default)]
    pub per_author_limit: Option<u64>,

    /// Maximum open pull requests sharing any one limited label
    #[serde(default)]
    pub per_label_limit: Option<u64>,

    /// Labels the per-label limit applies to
    #[serde(default)]
    pub limited_labels: Vec<String>,
}

impl Limits {
    /// Repository-wide limit, if enabled
    pub fn repo(&self) -> Option<u64> {
        enabled(self.repo_limit)
    }

    /// Per-author limit, if enabled
    pub fn per_author(&self) -> Option<u64> {
        enabled(self.per_author_limit)
    }

    /// Per-label limit, if enabled
    pub fn per_label(&self) -> Option<u64> {
        enabled(self.per_label_limit)
    }

    pub fn is_limited_label(&self, label: &str) -> bool {
        self.limited_labels.iter().any(|l| l == label)
    }

    /// True when every rule is disabled
    pub fn is_unrestricted(&self) -> bool {
        self.repo().is_none()
            && self.per_author().is_none()
            && (self.per_label().is_none() || self.limited_labels.is_empty())
    }
}

fn enabled(limit: Option<u64>) -> Option<u64> {
    limit.filter(|l| *l > 0)
}

fn display_limit(limit: Option<u64>) -> String {
    limit.map_or_else(|| "none".to_string(), |l| l.to_string())
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = if self.limited_labels.is_empty() {
            "none".to_string()
        } else {
            self.limited_labels.join(", ")
        };

        write!(
            f,
            "at most {} open PRs, at most {} open PRs per author, at most {} for each of these labels: {}",
            display_limit(self.repo_limit),
            display_limit(self.per_author_limit),
            display_limit(self.per_label_limit),
            labels
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_disables_rule() {
        let limits = Limits {
            repo_limit: Some(0),
            per_author_limit: Some(0),
            per_label_limit: Some(0),
            limited_labels: vec!["bug".to_string()],
        };

        assert_eq!(limits.repo(), None);
        assert_eq!(limits.per_author(), None);
        assert_eq!(limits.per_label(), None);
        assert!(limits.is_unrestricted());
    }

    #[test]
    fn test_label_limit_without_labels_is_unrestricted() {
        let limits = Limits {
            per_label_limit: Some(2),
            ..Default::default()
        };
        assert!(limits.is_unrestricted());
    }

    #[test]
    fn test_display_summary() {
        let limits = Limits {
            repo_limit: Some(10),
            per_author_limit: None,
            per_label_limit: Some(2),
            limited_labels: vec!["bug".to_string(), "ui".to_string()],
        };

        assert_eq!(
            limits.to_string(),
            "at most 10 open PRs, at most none open PRs per author, at most 2 for each of these labels: bug, ui"
        );
    }

    #[test]
    fn test_display_default() {
        assert_eq!(
            Limits::default().to_string(),
            "at most none open PRs, at most none open PRs per author, at most none for each of these labels: none"
        );
    }
}
