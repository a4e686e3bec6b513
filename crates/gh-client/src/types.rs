//! GitHub API wire types
//!
//! The REST payload for a pull request is deserialized into `RawPullRequest`
//! with every field the limit rules need kept optional, then validated into a
//! [`pr_limits::PullRequest`] by [`convert_pull_request`].

use pr_limits::PullRequest;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// A pull request as returned by `GET /repos/{owner}/{repo}/pulls`
#[derive(Debug, Clone, Deserialize)]
pub struct RawPullRequest {
    /// API identifier
    pub id: u64,

    /// PR number (e.g., 123)
    pub number: u64,

    /// Account that opened the PR
    pub user: Option<RawUser>,

    /// Draft flag (absent on some GitHub Enterprise versions)
    pub draft: Option<bool>,

    /// Head branch
    pub head: Option<RawBranchRef>,

    /// Base branch
    pub base: Option<RawBranchRef>,

    /// Labels applied to the PR
    pub labels: Option<Vec<RawLabel>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBranchRef {
    #[serde(rename = "ref")]
    pub ref_field: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLabel {
    pub name: Option<String>,
}

/// Which branch of a pull request a ref belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefSide {
    Head,
    Base,
}

impl fmt::Display for RefSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefSide::Head => f.write_str("head"),
            RefSide::Base => f.write_str("base"),
        }
    }
}

/// A pull request payload that cannot be turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("pull request #{number} has no author")]
    MissingAuthor { number: u64 },

    #[error("pull request #{number} has no {side} ref")]
    MissingRef { number: u64, side: RefSide },
}

/// Validate a raw payload into a pull request record
///
/// A missing `draft` flag means ready and missing `labels` means none;
/// labels without a name are skipped. Author and both refs are required.
pub fn convert_pull_request(raw: RawPullRequest) -> Result<PullRequest, ConversionError> {
    let number = raw.number;

    let author = raw
        .user
        .and_then(|u| u.login)
        .filter(|login| !login.is_empty())
        .ok_or(ConversionError::MissingAuthor { number })?;
    let head_ref = branch_ref(raw.head, number, RefSide::Head)?;
    let base_ref = branch_ref(raw.base, number, RefSide::Base)?;
    let labels = raw
        .labels
        .unwrap_or_default()
        .into_iter()
        .filter_map(|label| label.name);

    let pr = PullRequest::new(number, author)
        .with_id(raw.id)
        .with_refs(head_ref, base_ref)
        .with_labels(labels);

    Ok(if raw.draft.unwrap_or(false) {
        pr.as_draft()
    } else {
        pr
    })
}

fn branch_ref(
    branch: Option<RawBranchRef>,
    number: u64,
    side: RefSide,
) -> Result<String, ConversionError> {
    branch
        .and_then(|b| b.ref_field)
        .filter(|r| !r.is_empty())
        .ok_or(ConversionError::MissingRef { number, side })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawPullRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_convert_full_payload() {
        let pr = convert_pull_request(raw(json!({
            "id": 1001,
            "number": 42,
            "state": "open",
            "user": { "login": "alice", "id": 7 },
            "draft": true,
            "head": { "ref": "feature/limits", "sha": "abc123" },
            "base": { "ref": "main", "sha": "def456" },
            "labels": [{ "name": "bug" }, { "name": "ui", "color": "ff0000" }]
        })))
        .unwrap();

        assert_eq!(pr.id(), 1001);
        assert_eq!(pr.number(), 42);
        assert_eq!(pr.author(), "alice");
        assert!(pr.is_draft());
        assert_eq!(pr.head_ref(), "feature/limits");
        assert_eq!(pr.base_ref(), "main");
        assert_eq!(pr.labels(), ["bug".to_string(), "ui".to_string()]);
    }

    #[test]
    fn test_convert_defaults_draft_and_labels() {
        let pr = convert_pull_request(raw(json!({
            "id": 1,
            "number": 2,
            "user": { "login": "bob" },
            "head": { "ref": "topic" },
            "base": { "ref": "main" }
        })))
        .unwrap();

        assert!(!pr.is_draft());
        assert!(pr.labels().is_empty());
    }

    #[test]
    fn test_convert_skips_unnamed_labels() {
        let pr = convert_pull_request(raw(json!({
            "id": 1,
            "number": 2,
            "user": { "login": "bob" },
            "head": { "ref": "topic" },
            "base": { "ref": "main" },
            "labels": [{ "id": 5 }, { "name": "docs" }]
        })))
        .unwrap();

        assert_eq!(pr.labels(), ["docs".to_string()]);
    }

    #[test]
    fn test_convert_missing_author() {
        let result = convert_pull_request(raw(json!({
            "id": 1,
            "number": 9,
            "user": null,
            "head": { "ref": "topic" },
            "base": { "ref": "main" }
        })));

        assert_eq!(result, Err(ConversionError::MissingAuthor { number: 9 }));
    }

    #[test]
    fn test_convert_missing_refs() {
        let no_head = convert_pull_request(raw(json!({
            "id": 1,
            "number": 3,
            "user": { "login": "alice" },
            "base": { "ref": "main" }
        })));
        assert_eq!(
            no_head,
            Err(ConversionError::MissingRef {
                number: 3,
                side: RefSide::Head
            })
        );

        let empty_base = convert_pull_request(raw(json!({
            "id": 1,
            "number": 4,
            "user": { "login": "alice" },
            "head": { "ref": "topic" },
            "base": { "ref": "" }
        })));
        assert_eq!(
            empty_base.unwrap_err().to_string(),
            "pull request #4 has no base ref"
        );
    }
}
