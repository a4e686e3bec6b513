//! Token resolution and client construction
//!
//! Resolves the GitHub token for a run and builds an authenticated octocrab
//! instance, pointed at GitHub Enterprise when an API URL other than the
//! public one is configured.

use crate::{OctocrabClient, DEFAULT_API_URL};
use anyhow::{Context, Result};
use log::{debug, info};
use octocrab::Octocrab;
use std::sync::Arc;

/// Resolves the GitHub token to authenticate with
///
/// Tries sources in order:
/// 1. An explicitly configured token (the `repo-token` input)
/// 2. `GITHUB_TOKEN`
/// 3. `GH_TOKEN`
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    explicit: Option<String>,
}

impl TokenResolver {
    /// Create a resolver that prefers `explicit` when set
    pub fn new(explicit: Option<String>) -> Self {
        Self {
            explicit: explicit.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Resolve the token from the process environment
    pub fn resolve(&self) -> Result<String> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolve the token using `lookup` for environment variables
    pub fn resolve_with<F>(&self, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ref token) = self.explicit {
            debug!("Using token from repo-token input");
            return Ok(token.clone());
        }

        for key in ["GITHUB_TOKEN", "GH_TOKEN"] {
            if let Some(token) = lookup(key).filter(|t| !t.trim().is_empty()) {
                debug!("Using token from env var {}", key);
                return Ok(token);
            }
        }

        Err(anyhow::anyhow!(
            "No GitHub token found. Set the repo-token input, GITHUB_TOKEN or GH_TOKEN"
        ))
    }
}

/// Build an authenticated client
///
/// # Arguments
///
/// * `token` - Personal access or workflow token
/// * `api_url` - REST API root, `None` for api.github.com
pub fn build_client(token: String, api_url: Option<&str>) -> Result<OctocrabClient> {
    let mut builder = Octocrab::builder().personal_token(token);

    let api_url = api_url
        .map(|url| url.trim_end_matches('/'))
        .filter(|url| !url.is_empty() && *url != DEFAULT_API_URL);
    if let Some(url) = api_url {
        info!("Using GitHub API at {}", url);
        builder = builder
            .base_uri(url)
            .with_context(|| format!("Invalid GitHub API URL: {}", url))?;
    }

    let octocrab = builder.build().context("Failed to build Octocrab client")?;
    Ok(OctocrabClient::new(Arc::new(octocrab)))
}
