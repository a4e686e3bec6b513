//! Optional `.pr-limits.toml` configuration file
//!
//! Holds default limits for repositories that prefer a checked-in file over
//! workflow inputs. Inputs always take precedence.
//!
//! ```toml
//! [limits]
//! repo_limit = 20
//! per_author_limit = 3
//! per_label_limit = 2
//! limited_labels = ["bug", "needs-review"]
//! ```

use pr_limits::Limits;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".pr-limits.toml";

/// Contents of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub limits: Limits,
}

impl FileConfig {
    /// Load from the working directory first, then the home directory
    ///
    /// A missing file yields the defaults; an unparsable one is logged and
    /// ignored.
    pub fn load() -> Self {
        load_config_file().map_or_else(Self::default, |content| Self::parse(&content))
    }

    /// Parse file content, falling back to defaults on error
    pub fn parse(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded limits from {}", CONFIG_FILE);
                config
            }
            Err(e) => {
                log::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                Self::default()
            }
        }
    }
}

/// Load config file content from CWD first, then home directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    candidate_paths()
        .into_iter()
        .find_map(|path| read_config(&path))
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(CONFIG_FILE));
    }
    paths
}

fn read_config(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    log::debug!("Loaded config from {}", path.display());
    Some(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file() {
        let config = FileConfig::parse(
            r#"
            [limits]
            repo_limit = 20
            per_author_limit = 3
            per_label_limit = 2
            limited_labels = ["bug", "needs-review"]
            "#,
        );

        assert_eq!(
            config.limits,
            Limits {
                repo_limit: Some(20),
                per_author_limit: Some(3),
                per_label_limit: Some(2),
                limited_labels: vec!["bug".to_string(), "needs-review".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_partial_file() {
        let config = FileConfig::parse(
            r#"
            [limits]
            per_author_limit = 1
            "#,
        );

        assert_eq!(config.limits.per_author_limit, Some(1));
        assert_eq!(config.limits.repo_limit, None);
        assert!(config.limits.limited_labels.is_empty());
    }

    #[test]
    fn test_parse_invalid_file_falls_back() {
        let config = FileConfig::parse("limits = [1, 2");
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_candidate_paths_start_with_cwd() {
        let paths = candidate_paths();
        assert_eq!(paths[0], PathBuf::from(CONFIG_FILE));
    }
}
