//! GitHub client trait
//!
//! This module defines the `GitHubClient` trait covering the two remote
//! operations limit enforcement needs: listing open pull requests and
//! closing one with a comment.

use async_trait::async_trait;
use pr_limits::PullRequest;

/// GitHub API client trait
///
/// Implementations can hit the API directly or be test doubles.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::GitHubClient;
/// use pr_limits::PullRequest;
///
/// async fn list_prs(client: &dyn GitHubClient) -> anyhow::Result<Vec<PullRequest>> {
///     client.fetch_open_pull_requests("rust-lang", "rust").await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch every open pull request of a repository
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    ///
    /// # Returns
    ///
    /// All open pull requests across all pages, in API order, or an error
    /// if a request fails or a payload is malformed.
    async fn fetch_open_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> anyhow::Result<Vec<PullRequest>>;

    /// Comment on a pull request, then close it without merging
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    /// * `comment` - Comment body posted before closing
    ///
    /// # Returns
    ///
    /// Ok(()) on success, error on failure
    async fn close_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        comment: &str,
    ) -> anyhow::Result<()>;
}
