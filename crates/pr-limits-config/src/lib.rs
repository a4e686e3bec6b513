//! Configuration for pr-limits runs
//!
//! This crate provides:
//! - GitHub Actions input reading (`INPUT_*` variables)
//! - Workflow event context (triggering pull request, repository)
//! - Optional `.pr-limits.toml` defaults
//! - Construction of the immutable [`Limits`] for a run

pub mod config_file;
pub mod error;
pub mod event;
pub mod inputs;
pub mod limits;

pub use config_file::{load_config_file, FileConfig};
pub use error::ConfigError;
pub use event::{EventContext, Repository};
pub use inputs::ActionInputs;
pub use limits::{build_limits, parse_labels, parse_limit};

use pr_limits::Limits;

/// Everything a run needs, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionConfig {
    /// The `repo-token` input, if given
    pub token: Option<String>,
    /// GitHub REST API root (`GITHUB_API_URL`)
    pub api_url: Option<String>,
    pub repository: Repository,
    pub pull_request_number: u64,
    pub limits: Limits,
}

impl ActionConfig {
    /// Read the configuration from the process environment and config file
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), &FileConfig::load())
    }

    /// Read the configuration through `lookup` with `file` as defaults
    ///
    /// The event is checked first so non pull request events fail before
    /// any input is parsed.
    pub fn from_lookup<F>(lookup: F, file: &FileConfig) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let event = EventContext::from_lookup(&lookup)?;
        let inputs = ActionInputs::from_lookup(&lookup);
        let limits = build_limits(&inputs, file)?;

        Ok(Self {
            token: inputs.repo_token,
            api_url: lookup("GITHUB_API_URL").filter(|url| !url.trim().is_empty()),
            repository: event.repository,
            pull_request_number: event.pull_request_number,
            limits,
        })
    }
}
