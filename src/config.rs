//! Katas Configuration
//!
//! Handles parsing and management of katas.toml configuration files.

use crate::exercises::Category;
use crate::report::OutputFormat;
use crate::runner::RunnerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for by [`KatasConfig::find_and_load`].
pub const CONFIG_FILE_NAME: &str = "katas.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching katas.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct KatasConfig {
    /// Runner settings
    #[serde(default)]
    pub runner: RunnerSection,

    /// Category enable/disable flags
    #[serde(default)]
    pub categories: CategoriesConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl KatasConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: KatasConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration from the current directory or parents.
    pub fn load_from_cwd() -> ConfigResult<Self> {
        let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
        Self::find_and_load(&cwd)
    }

    /// Path of the nearest katas.toml at or above `start_dir`.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Find and load configuration by searching up from the given directory.
    /// Defaults apply when no file exists anywhere up to the root.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        match Self::find(start_dir) {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!(start = %start_dir.display(), "no config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Categories whose flag is set, in catalog order.
    pub fn enabled_categories(&self) -> Vec<Category> {
        Category::all()
            .iter()
            .copied()
            .filter(|&c| self.categories.is_enabled(c))
            .collect()
    }

    /// Runner configuration with these settings.
    pub fn runner_config(&self) -> RunnerConfig {
        RunnerConfig {
            jobs: self.runner.jobs,
            fail_fast: self.runner.fail_fast,
            enabled: self.enabled_categories(),
        }
    }
}

/// Runner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerSection {
    /// Worker threads (0 = one per available CPU)
    #[serde(default)]
    pub jobs: usize,

    /// Stop after the first failing exercise
    #[serde(default)]
    pub fail_fast: bool,

    /// Report format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for RunnerSection {
    fn default() -> Self {
        Self {
            jobs: 0,
            fail_fast: false,
            format: OutputFormat::Text,
        }
    }
}

/// Category enable/disable flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriesConfig {
    #[serde(default = "default_true")]
    pub sorting: bool,

    #[serde(default = "default_true")]
    pub searching: bool,

    #[serde(default = "default_true")]
    pub graph: bool,

    #[serde(default = "default_true")]
    pub strings: bool,

    #[serde(default = "default_true")]
    pub numeric: bool,

    #[serde(default = "default_true")]
    pub dynamic: bool,

    /// LRU cache, min stack, trie, union-find
    #[serde(default = "default_true")]
    pub collections: bool,

    #[serde(default = "default_true")]
    pub crypto: bool,

    /// Input validation and output encoding
    #[serde(default = "default_true")]
    pub secure: bool,

    /// Thread puzzles; spawns real threads
    #[serde(default = "default_true")]
    pub concurrency: bool,
}

fn default_true() -> bool {
    true
}

impl CategoriesConfig {
    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Sorting => self.sorting,
            Category::Searching => self.searching,
            Category::Graph => self.graph,
            Category::Strings => self.strings,
            Category::Numeric => self.numeric,
            Category::Dynamic => self.dynamic,
            Category::Collections => self.collections,
            Category::Crypto => self.crypto,
            Category::Secure => self.secure,
            Category::Concurrency => self.concurrency,
        }
    }
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            sorting: true,
            searching: true,
            graph: true,
            strings: true,
            numeric: true,
            dynamic: true,
            collections: true,
            crypto: true,
            secure: true,
            concurrency: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset (e.g. "info", "katas=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = KatasConfig::default();
        assert_eq!(config.runner.jobs, 0);
        assert!(!config.runner.fail_fast);
        assert_eq!(config.runner.format, OutputFormat::Text);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.enabled_categories().len(), Category::all().len());
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
[runner]
jobs = 4
fail_fast = true
format = "json"

[categories]
crypto = false
concurrency = false

[logging]
level = "debug"
"#;
        let config: KatasConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.runner.jobs, 4);
        assert!(config.runner.fail_fast);
        assert_eq!(config.runner.format, OutputFormat::Json);
        assert!(config.categories.sorting);
        assert!(!config.categories.crypto);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_enabled_categories() {
        let mut config = KatasConfig::default();
        config.categories.graph = false;
        config.categories.secure = false;

        let enabled = config.enabled_categories();
        assert!(enabled.contains(&Category::Sorting));
        assert!(!enabled.contains(&Category::Graph));
        assert!(!enabled.contains(&Category::Secure));
        assert_eq!(config.runner_config().enabled, enabled);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut config = KatasConfig::default();
        config.runner.jobs = 3;
        config.categories.dynamic = false;
        config.save(&path).unwrap();

        assert_eq!(KatasConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_find_and_load_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[runner]\njobs = 7\n").unwrap();

        let config = KatasConfig::find_and_load(&nested).unwrap();
        assert_eq!(config.runner.jobs, 7);
        assert_eq!(
            KatasConfig::find(&nested),
            Some(dir.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(matches!(KatasConfig::load(&path), Err(ConfigError::NotFound(_))));

        std::fs::write(&path, "[runner]\njobs = \"many\"\n").unwrap();
        assert!(matches!(KatasConfig::load(&path), Err(ConfigError::Parse(_))));
    }
}
