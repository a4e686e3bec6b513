use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning the run environment into configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Input '{input}' must be a non-negative integer, got '{value}'")]
    InvalidLimit { input: &'static str, value: String },

    #[error("This action can only be used with pull request events (got '{event}')")]
    UnsupportedEvent { event: String },

    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("Invalid repository '{0}', expected 'owner/name'")]
    InvalidRepository(String),

    #[error("Failed to read event payload {}", path.display())]
    ReadEvent {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse event payload")]
    EventPayload(#[from] serde_json::Error),
}
