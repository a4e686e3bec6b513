//! Open pull request limits
//!
//! Pure decision logic for closing pull requests that exceed configured
//! quotas. Given a snapshot of open pull requests, the [`Limits`] in effect
//! and the number of the pull request that triggered the run,
//! [`enforce_limits`] returns a [`Decision`].
//!
//! Rules are evaluated in a fixed priority order and the first violation
//! wins:
//!
//! ```text
//! repo limit ──► author limit ──► label limit ──► no action
//! ```
//!
//! # Example
//!
//! ```rust
//! use pr_limits::{enforce_limits, Decision, Limits, PullRequest};
//!
//! let open = vec![
//!     PullRequest::new(1, "alice"),
//!     PullRequest::new(2, "alice"),
//! ];
//! let limits = Limits {
//!     per_author_limit: Some(1),
//!     ..Default::default()
//! };
//!
//! let decision = enforce_limits(&open, &limits, 2);
//! assert!(matches!(decision, Decision::Close { number: 2, .. }));
//! ```

pub mod enforcer;
pub mod limits;
pub mod pull_request;
pub mod rules;

pub use enforcer::{enforce_limits, Decision, Enforcer};
pub use limits::Limits;
pub use pull_request::PullRequest;
pub use rules::{Rule, Violation};
