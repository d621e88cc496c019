//! # Configuration
//!
//! Settings live in `settings.json` next to the phonebook file. The file is
//! created with defaults on first run; keys missing from an existing file fall
//! back to their defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `column_width` | `16` | Table column width and max field length (min 16) |
//! | `records_per_page` | `10` | Rows per page when listing (min 1) |
//! | `search_strict` | `false` | Exact match instead of substring |
//! | `search_case_sensitive` | `false` | Compare without lower-casing |
//!
//! Out-of-range values are not rejected; [`PhonebookConfig::normalized`]
//! clamps them and logs a warning.

use crate::error::{PhonebookError, Result};
use crate::search::SearchOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "settings.json";
pub const MIN_COLUMN_WIDTH: usize = 16;
pub const DEFAULT_RECORDS_PER_PAGE: usize = 10;

/// Keys accepted by [`PhonebookConfig::get`] and [`PhonebookConfig::set`].
pub const CONFIG_KEYS: [&str; 4] = [
    "column_width",
    "records_per_page",
    "search_strict",
    "search_case_sensitive",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    #[serde(default = "default_column_width")]
    pub column_width: usize,

    #[serde(default = "default_records_per_page")]
    pub records_per_page: usize,

    #[serde(default)]
    pub search_strict: bool,

    #[serde(default)]
    pub search_case_sensitive: bool,
}

fn default_column_width() -> usize {
    MIN_COLUMN_WIDTH
}

fn default_records_per_page() -> usize {
    DEFAULT_RECORDS_PER_PAGE
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            column_width: MIN_COLUMN_WIDTH,
            records_per_page: DEFAULT_RECORDS_PER_PAGE,
            search_strict: false,
            search_case_sensitive: false,
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PhonebookError::Io)?;
        let config: PhonebookConfig =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but writes the defaults out when the file is missing.
    pub fn load_or_create<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        if config_dir.join(CONFIG_FILENAME).exists() {
            return Self::load(config_dir);
        }
        let config = Self::default();
        config.save(config_dir)?;
        log::info!("Wrote default settings to {}", config_dir.display());
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PhonebookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PhonebookError::Serialization)?;
        fs::write(config_path, content).map_err(PhonebookError::Io)?;
        Ok(())
    }

    /// Clamp values the table layout and pager cannot work with.
    pub fn normalized(mut self) -> Self {
        if self.column_width < MIN_COLUMN_WIDTH {
            log::warn!(
                "column_width {} is below the minimum, using {}",
                self.column_width,
                MIN_COLUMN_WIDTH
            );
            self.column_width = MIN_COLUMN_WIDTH;
        }
        if self.records_per_page < 1 {
            log::warn!(
                "records_per_page must be at least 1, using {}",
                DEFAULT_RECORDS_PER_PAGE
            );
            self.records_per_page = DEFAULT_RECORDS_PER_PAGE;
        }
        self
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::new(self.search_strict, self.search_case_sensitive)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "column_width" => Ok(self.column_width.to_string()),
            "records_per_page" => Ok(self.records_per_page.to_string()),
            "search_strict" => Ok(self.search_strict.to_string()),
            "search_case_sensitive" => Ok(self.search_case_sensitive.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "column_width" => self.column_width = parse_value(key, value)?,
            "records_per_page" => self.records_per_page = parse_value(key, value)?,
            "search_strict" => self.search_strict = parse_value(key, value)?,
            "search_case_sensitive" => self.search_case_sensitive = parse_value(key, value)?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .to_lowercase()
        .parse()
        .map_err(|_| PhonebookError::Config(format!("Invalid value for {}: {}", key, value)))
}

fn unknown_key(key: &str) -> PhonebookError {
    PhonebookError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PhonebookConfig::default();
        assert_eq!(config.column_width, 16);
        assert_eq!(config.records_per_page, 10);
        assert!(!config.search_strict);
        assert!(!config.search_case_sensitive);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = PhonebookConfig::load(dir.path()).unwrap();
        assert_eq!(config, PhonebookConfig::default());
        assert!(!dir.path().join(CONFIG_FILENAME).exists());
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PhonebookConfig::load_or_create(dir.path()).unwrap();
        assert_eq!(config, PhonebookConfig::default());
        assert!(dir.path().join(CONFIG_FILENAME).exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config = PhonebookConfig {
            column_width: 24,
            search_strict: true,
            ..Default::default()
        };
        config.save(dir.path()).unwrap();

        let loaded = PhonebookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: PhonebookConfig = serde_json::from_str(r#"{"search_strict": true}"#).unwrap();
        assert_eq!(config.column_width, 16);
        assert_eq!(config.records_per_page, 10);
        assert!(config.search_strict);
    }

    #[test]
    fn test_normalized_clamps_small_values() {
        let config = PhonebookConfig {
            column_width: 8,
            records_per_page: 0,
            ..Default::default()
        }
        .normalized();
        assert_eq!(config.column_width, 16);
        assert_eq!(config.records_per_page, 10);
    }

    #[test]
    fn test_normalized_keeps_valid_values() {
        let config = PhonebookConfig {
            column_width: 30,
            records_per_page: 3,
            ..Default::default()
        };
        assert_eq!(config.clone().normalized(), config);
    }

    #[test]
    fn test_get_and_set() {
        let mut config = PhonebookConfig::default();
        config.set("search_case_sensitive", "True").unwrap();
        config.set("records_per_page", "25").unwrap();
        assert_eq!(config.get("search_case_sensitive").unwrap(), "true");
        assert_eq!(config.get("records_per_page").unwrap(), "25");
        assert_eq!(
            config.search_options(),
            SearchOptions::new(false, true)
        );
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = PhonebookConfig::default();
        assert!(config.set("records_per_page", "many").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
    }
}
