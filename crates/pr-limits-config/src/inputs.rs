//! GitHub Actions inputs
//!
//! The runner exposes each `with:` input as an environment variable named
//! `INPUT_<NAME>`, upper-cased with spaces replaced by underscores. Hyphens
//! are kept, so `repo-limit` becomes `INPUT_REPO-LIMIT`.

pub const REPO_TOKEN: &str = "repo-token";
pub const REPO_LIMIT: &str = "repo-limit";
pub const PER_AUTHOR_LIMIT: &str = "per-author-limit";
pub const PER_LABEL_LIMIT: &str = "per-label-limit";
pub const LIMITED_LABELS: &str = "limited-labels";

/// Raw action inputs, trimmed, with blank values treated as unset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionInputs {
    pub repo_token: Option<String>,
    pub repo_limit: Option<String>,
    pub per_author_limit: Option<String>,
    pub per_label_limit: Option<String>,
    pub limited_labels: Option<String>,
}

impl ActionInputs {
    /// Read all inputs through `lookup`, which maps an env var name to its value
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| get_input(&lookup, name);

        Self {
            repo_token: get(REPO_TOKEN),
            repo_limit: get(REPO_LIMIT),
            per_author_limit: get(PER_AUTHOR_LIMIT),
            per_label_limit: get(PER_LABEL_LIMIT),
            limited_labels: get(LIMITED_LABELS),
        }
    }
}

/// Environment variable the runner uses for input `name`
pub fn input_env_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Read one input; blank values are `None`
pub fn get_input<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(&input_env_key(name))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
