//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use refbench_compare::ComparatorConfig;
use refbench_readers::ResultCache;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Comparator defaults, overridden by a manifest's own `[comparator]`
    #[serde(default)]
    pub comparator: ComparatorConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Directory of cached detector results
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Plain text report
    Text,
}

impl Config {
    /// Directory holding the default configuration and cache.
    pub fn home() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".refbench"))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::home()?.join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::path()?,
        };

        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)?;
        config.comparator.validate()?;
        Ok(config)
    }

    /// Result cache, under `~/.refbench/cache` unless configured.
    pub fn cache(&self) -> Result<ResultCache> {
        let dir = match &self.cache_dir {
            Some(dir) => dir.clone(),
            None => Self::home()?.join("cache"),
        };
        Ok(ResultCache::new(dir))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert!(config.comparator.ignore_pull_up_to_extracted_supertype);
        assert!(config.cache_dir.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "cache_dir = \"/tmp/refbench\"\n\n[settings]\nformat = \"json\"\n\n[comparator]\ngroup_refactorings = true\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert!(config.comparator.group_refactorings);
        assert!(config.comparator.ignore_pull_up_to_extracted_supertype);
        assert_eq!(config.cache().unwrap().dir(), Path::new("/tmp/refbench"));
    }

    #[test]
    fn test_invalid_comparator_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[comparator]\ndecimals = 0\n").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(CliError::Compare(_))));
    }
}
