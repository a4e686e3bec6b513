//! Workflow event context
//!
//! Identifies the repository and the pull request that triggered the run
//! from `GITHUB_EVENT_NAME`, `GITHUB_EVENT_PATH` and `GITHUB_REPOSITORY`.

use crate::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Events that carry a pull request payload
pub const PULL_REQUEST_EVENTS: [&str; 2] = ["pull_request", "pull_request_target"];

/// Owner and name of a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Parse an `owner/name` slug
    pub fn parse(slug: &str) -> Result<Self, ConfigError> {
        match slug.trim().split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(ConfigError::InvalidRepository(slug.to_string())),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: u64,
}

/// The triggering event of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext {
    pub event_name: String,
    pub repository: Repository,
    pub pull_request_number: u64,
}

impl EventContext {
    /// Read the context through `lookup`, loading the payload file it points to
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let event_name =
            lookup("GITHUB_EVENT_NAME").ok_or(ConfigError::MissingEnv("GITHUB_EVENT_NAME"))?;
        ensure_pull_request_event(&event_name)?;

        let path = lookup("GITHUB_EVENT_PATH")
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingEnv("GITHUB_EVENT_PATH"))?;
        let payload = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::ReadEvent { path, source })?;

        let repository = lookup("GITHUB_REPOSITORY")
            .ok_or(ConfigError::MissingEnv("GITHUB_REPOSITORY"))
            .and_then(|slug| Repository::parse(&slug))?;

        Self::from_payload(event_name, repository, &payload)
    }

    /// Build the context from an already loaded event payload
    pub fn from_payload(
        event_name: String,
        repository: Repository,
        payload: &str,
    ) -> Result<Self, ConfigError> {
        ensure_pull_request_event(&event_name)?;

        let payload: EventPayload = serde_json::from_str(payload)?;
        let pull_request = payload
            .pull_request
            .ok_or_else(|| ConfigError::UnsupportedEvent {
                event: event_name.clone(),
            })?;

        Ok(Self {
            event_name,
            repository,
            pull_request_number: pull_request.number,
        })
    }
}

fn ensure_pull_request_event(event_name: &str) -> Result<(), ConfigError> {
    if PULL_REQUEST_EVENTS.contains(&event_name) {
        Ok(())
    } else {
        Err(ConfigError::UnsupportedEvent {
            event: event_name.to_string(),
        })
    }
}
