use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, DEFAULT_CSV_PATH, DEFAULT_INPUT_PATH, DEFAULT_JSON_PATH,
    DEFAULT_LOG_DIR,
};
use crate::error::{Result, ScraperError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Saved listing page to read
    pub input_path: PathBuf,
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            json_path: PathBuf::from(DEFAULT_JSON_PATH),
            log_dir: DEFAULT_LOG_DIR.to_string(),
        }
    }
}

impl Config {
    /// Load `config.toml` (or the file named by `REVIEW_SCRAPER_CONFIG`).
    ///
    /// A missing default file means built-in paths; a missing file that was
    /// named explicitly is an error.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(Path::new(path.trim())),
            _ => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    debug!("No {} found; using built-in paths", DEFAULT_CONFIG_PATH);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.input_path.as_os_str().is_empty() {
            return Err(ScraperError::Config("input_path must not be empty".into()));
        }
        if config.csv_path == config.json_path {
            return Err(ScraperError::Config(
                "csv_path and json_path must point to different files".into(),
            ));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("page.html"));
        assert_eq!(config.csv_path, PathBuf::from("parsed.csv"));
        assert_eq!(config.json_path, PathBuf::from("parsed.json"));
        assert_eq!(config.log_dir, "logs");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(r#"input_path = "saved/norbert.html""#).unwrap();
        assert_eq!(config.input_path, PathBuf::from("saved/norbert.html"));
        assert_eq!(config.csv_path, PathBuf::from("parsed.csv"));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(matches!(
            Config::from_toml("output = \"x.csv\""),
            Err(ScraperError::Toml(_))
        ));
    }

    #[test]
    fn test_rejects_colliding_outputs() {
        let err = Config::from_toml("csv_path = \"out\"\njson_path = \"out\"").unwrap_err();
        assert!(matches!(err, ScraperError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = Config::from_file(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ScraperError::Config(_)));
    }
}
