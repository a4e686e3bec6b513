//! Building [`Limits`] from inputs and the config file

use crate::inputs::{ActionInputs, LIMITED_LABELS, PER_AUTHOR_LIMIT, PER_LABEL_LIMIT, REPO_LIMIT};
use crate::{ConfigError, FileConfig};
use pr_limits::Limits;

/// Build the limits for a run
///
/// Each input overrides the matching config file setting. Numeric inputs
/// must be non-negative integers.
pub fn build_limits(inputs: &ActionInputs, file: &FileConfig) -> Result<Limits, ConfigError> {
    let defaults = &file.limits;

    let limited_labels = inputs
        .limited_labels
        .as_deref()
        .map(parse_labels)
        .filter(|labels| !labels.is_empty())
        .unwrap_or_else(|| clean_labels(&defaults.limited_labels));

    Ok(Limits {
        repo_limit: parse_limit(REPO_LIMIT, inputs.repo_limit.as_deref())?.or(defaults.repo_limit),
        per_author_limit: parse_limit(PER_AUTHOR_LIMIT, inputs.per_author_limit.as_deref())?
            .or(defaults.per_author_limit),
        per_label_limit: parse_limit(PER_LABEL_LIMIT, inputs.per_label_limit.as_deref())?
            .or(defaults.per_label_limit),
        limited_labels,
    })
}

/// Parse an optional numeric input
pub fn parse_limit(input: &'static str, value: Option<&str>) -> Result<Option<u64>, ConfigError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    value
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidLimit {
            input,
            value: value.to_string(),
        })
}

/// Split a comma-delimited label list, trimming entries and dropping blanks
pub fn parse_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

fn clean_labels(labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}
