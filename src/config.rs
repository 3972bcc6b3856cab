//! Generator configuration
//!
//! Read from `--config <FILE>`, else `./lazylit.yaml`, else
//! `~/.config/lazylit/config.yaml`. Every field is optional.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What to do when a file fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop at the first failure and report it
    #[default]
    FailFast,
    /// Process every file, then report all failures together
    CollectAll,
}

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Root holding one directory per artifact
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Where pages, indexes and assets are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Worker threads for page rendering; defaults to available parallelism
    #[serde(default)]
    pub jobs: Option<usize>,

    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Stylesheet file name in the output root
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,

    /// Write a `.nojekyll` marker so GitHub Pages serves the output unchanged
    #[serde(default = "default_nojekyll")]
    pub nojekyll: bool,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_stylesheet() -> String {
    "lazylit.css".to_string()
}

fn default_nojekyll() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            jobs: None,
            failure_policy: FailurePolicy::default(),
            stylesheet: default_stylesheet(),
            nojekyll: default_nojekyll(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load an explicitly requested config file; any failure is an error
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `./lazylit.yaml` or the per-user config file, or return defaults
    pub fn discover() -> Self {
        let local = PathBuf::from(crate::config_paths::LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load_or_default(&local);
        }

        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_or_default(&path)
    }

    fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Number of worker threads to use; never zero
    pub fn worker_count(&self) -> usize {
        match self.jobs {
            Some(n) if n > 0 => n,
            _ => std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = GeneratorConfig::from_yaml("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.input_dir, PathBuf::from("artifacts"));
        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert!(config.nojekyll);
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = GeneratorConfig::from_yaml("output_dir: site\njobs: 3\n").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("site"));
        assert_eq!(config.jobs, Some(3));
        assert_eq!(config.input_dir, PathBuf::from("artifacts"));
        assert_eq!(config.stylesheet, "lazylit.css");
    }

    #[test]
    fn test_failure_policy_is_kebab_case() {
        let config = GeneratorConfig::from_yaml("failure_policy: collect-all\n").unwrap();
        assert_eq!(config.failure_policy, FailurePolicy::CollectAll);

        let err = GeneratorConfig::from_yaml("failure_policy: sometimes\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_worker_count_never_zero() {
        let mut config = GeneratorConfig::default();
        assert!(config.worker_count() >= 1);
        config.jobs = Some(0);
        assert!(config.worker_count() >= 1);
        config.jobs = Some(4);
        assert_eq!(config.worker_count(), 4);
    }
}
