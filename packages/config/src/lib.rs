#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Configuration for the tweet trends tools.
//!
//! A `trends.toml` file names the data files and the defaults used by the
//! CLI. Every field is optional:
//!
//! ```toml
//! [data]
//! dir = "data"
//! sentiments = "sentiments.csv"
//! tweets = "all_tweets.txt"
//! regions = "states.json"
//!
//! [defaults]
//! term = "my job"
//! center_region = "TX"
//! center_count = 10
//! ```
//!
//! File names are resolved against `data.dir`, and a relative `data.dir`
//! is resolved against the directory holding the config file.

pub mod paths;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`TrendsConfig`].
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendsConfig {
    /// Data file locations.
    pub data: DataConfig,
    /// CLI defaults.
    pub defaults: DefaultsConfig,
}

/// Where the data files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory the file names below are relative to.
    pub dir: PathBuf,
    /// `word,score` sentiment table.
    pub sentiments: PathBuf,
    /// Tab-separated tweet dump.
    pub tweets: PathBuf,
    /// Region polygons (`GeoJSON` or legacy `states.json`).
    pub regions: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: paths::data_dir(),
            sentiments: PathBuf::from("sentiments.csv"),
            tweets: PathBuf::from("all_tweets.txt"),
            regions: PathBuf::from("states.json"),
        }
    }
}

impl DataConfig {
    /// Full path of the sentiment table.
    #[must_use]
    pub fn sentiments_path(&self) -> PathBuf {
        self.dir.join(&self.sentiments)
    }

    /// Full path of the tweet dump.
    #[must_use]
    pub fn tweets_path(&self) -> PathBuf {
        self.dir.join(&self.tweets)
    }

    /// Full path of the region polygon file.
    #[must_use]
    pub fn regions_path(&self) -> PathBuf {
        self.dir.join(&self.regions)
    }
}

/// Defaults for CLI arguments that were not given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Search term for `map` and `by-hour`.
    pub term: String,
    /// Reference region for `centered`.
    pub center_region: String,
    /// Number of regions listed by `centered`.
    pub center_count: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            term: "my job".to_string(),
            center_region: "TX".to_string(),
            center_count: 10,
        }
    }
}

impl TrendsConfig {
    /// Parses configuration from TOML text. A relative `data.dir` is left
    /// as written.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text is not valid.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::de::from_str(contents)?)
    }

    /// Loads configuration from a file, resolving a relative `data.dir`
    /// against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&contents)?;

        if config.data.dir.is_relative()
            && let Some(parent) = path.parent()
        {
            config.data.dir = parent.join(&config.data.dir);
        }

        log::debug!(
            "Loaded config from {} (data dir {})",
            path.display(),
            config.data.dir.display()
        );

        Ok(config)
    }

    /// Loads `path` if given, otherwise the project's `trends.toml` if it
    /// exists, otherwise the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a config file exists but cannot be read
    /// or parsed. An explicitly given path must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = paths::default_config_path();
        if default_path.is_file() {
            return Self::load(&default_path);
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = TrendsConfig::from_toml_str("").unwrap();
        assert_eq!(config, TrendsConfig::default());
        assert_eq!(config.defaults.term, "my job");
        assert_eq!(config.defaults.center_region, "TX");
        assert_eq!(config.defaults.center_count, 10);
        assert_eq!(
            config.data.sentiments_path(),
            paths::data_dir().join("sentiments.csv")
        );
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = TrendsConfig::from_toml_str(
            r#"
            [data]
            regions = "us_states.geojson"

            [defaults]
            center_count = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.data.regions, PathBuf::from("us_states.geojson"));
        assert_eq!(config.data.tweets, PathBuf::from("all_tweets.txt"));
        assert_eq!(config.defaults.center_count, 3);
        assert_eq!(config.defaults.term, "my job");
    }

    #[test]
    fn absolute_file_names_ignore_dir() {
        let config = TrendsConfig::from_toml_str(
            r#"
            [data]
            dir = "/srv/trends"
            tweets = "/tmp/sample_tweets.txt"
            "#,
        )
        .unwrap();
        assert_eq!(config.data.tweets_path(), PathBuf::from("/tmp/sample_tweets.txt"));
        assert_eq!(
            config.data.regions_path(),
            PathBuf::from("/srv/trends/states.json")
        );
    }

    #[test]
    fn rejects_wrong_types() {
        let result = TrendsConfig::from_toml_str("[defaults]\ncenter_count = \"ten\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_resolves_relative_dir_against_file() {
        let dir = std::env::temp_dir().join(format!("trends_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("trends.toml");
        std::fs::write(&path, "[data]\ndir = \"fixtures\"\n").unwrap();

        let config = TrendsConfig::load(&path).unwrap();
        assert_eq!(config.data.dir, dir.join("fixtures"));
        assert_eq!(
            config.data.sentiments_path(),
            dir.join("fixtures").join("sentiments.csv")
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = Path::new("/nonexistent/trends.toml");
        assert!(matches!(
            TrendsConfig::load_or_default(Some(missing)),
            Err(ConfigError::Io(_))
        ));
    }
}
