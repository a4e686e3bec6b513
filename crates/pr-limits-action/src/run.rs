//! One enforcement run
//!
//! Fetch the open pull requests, decide, and close the trigger when a limit
//! is exceeded. At most one close request is sent per run.

use anyhow::{Context, Result};
use gh_client::GitHubClient;
use log::{Level, debug, info, log_enabled};
use pr_limits::{Decision, enforce_limits};
use pr_limits_config::ActionConfig;

pub async fn run<C>(client: &C, config: &ActionConfig) -> Result<Decision>
where
    C: GitHubClient + ?Sized,
{
    let repo = &config.repository;
    info!(
        "Checking PR #{} against open PR limits of {}",
        config.pull_request_number, repo
    );

    let open_prs = client
        .fetch_open_pull_requests(&repo.owner, &repo.name)
        .await
        .with_context(|| format!("Failed to fetch open PRs of {}", repo))?;
    if log_enabled!(Level::Debug) {
        debug!("{}", serde_json::to_string(&open_prs)?);
    }

    let decision = enforce_limits(&open_prs, &config.limits, config.pull_request_number);

    if let Decision::Close {
        number, message, ..
    } = &decision
    {
        client
            .close_pull_request(&repo.owner, &repo.name, *number, message)
            .await
            .with_context(|| format!("Failed to close PR #{}", number))?;
        info!("Closed PR #{}", number);
    }

    Ok(decision)
}
