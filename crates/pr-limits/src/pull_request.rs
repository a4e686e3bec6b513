//! Pull request record
//!
//! A point-in-time snapshot of the pull request attributes the limit rules
//! look at. Records are built once per fetch and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An open pull request as seen at fetch time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    id: u64,
    number: u64,
    author: String,
    draft: bool,
    head_ref: String,
    base_ref: String,
    labels: Vec<String>,
}

impl PullRequest {
    /// Create a ready (non-draft) pull request without labels or refs
    pub fn new(number: u64, author: impl Into<String>) -> Self {
        Self {
            id: number,
            number,
            author: author.into(),
            draft: false,
            head_ref: String::new(),
            base_ref: String::new(),
            labels: Vec::new(),
        }
    }

    /// Set the opaque API identifier
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Set the head and base branch names
    pub fn with_refs(mut self, head_ref: impl Into<String>, base_ref: impl Into<String>) -> Self {
        self.head_ref = head_ref.into();
        self.base_ref = base_ref.into();
        self
    }

    /// Replace the label set
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the pull request as a draft
    pub fn as_draft(mut self) -> Self {
        self.draft = true;
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn is_draft(&self) -> bool {
        self.draft
    }

    pub fn head_ref(&self) -> &str {
        &self.head_ref
    }

    pub fn base_ref(&self) -> &str {
        &self.base_ref
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether the pull request carries the given label
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// One-line summary used in closure comments
    ///
    /// Renders as `#<number> (draft|ready; <head> -> <base>)`.
    pub fn summary(&self) -> Summary<'_> {
        Summary(self)
    }
}

/// Display adapter returned by [`PullRequest::summary`]
pub struct Summary<'a>(&'a PullRequest);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pr = self.0;
        let state = if pr.draft { "draft" } else { "ready" };
        write!(
            f,
            "#{} ({}; {} -> {})",
            pr.number, state, pr.head_ref, pr.base_ref
        )
    }
}
