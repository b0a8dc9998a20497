use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("Failed to read input document '{}': {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is not a parseable markup document: {0}")]
    Parse(String),

    #[error("Failed to write output '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScraperError>;
