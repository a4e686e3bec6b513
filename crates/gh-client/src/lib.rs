//! GitHub API client for pull request limit enforcement
//!
//! This crate provides a trait-based GitHub API client covering the remote
//! side of a limit enforcement run: listing open pull requests and closing
//! one with a comment.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_open_pull_requests()                    │
//! │  - close_pull_request()                          │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │──► RawPullRequest ──► pr_limits::PullRequest
//!              │ (direct API)    │      (validated by convert_pull_request)
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{build_client, GitHubClient, TokenResolver};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let token = TokenResolver::default().resolve()?;
//! let client = build_client(token, None)?;
//!
//! let prs = client.fetch_open_pull_requests("owner", "repo").await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod octocrab_client;
pub mod types;

/// Public GitHub REST API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub use auth::{build_client, TokenResolver};
pub use client::GitHubClient;
pub use octocrab_client::OctocrabClient;
pub use types::{convert_pull_request, ConversionError, RawPullRequest, RefSide};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
