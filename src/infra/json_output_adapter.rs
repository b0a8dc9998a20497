use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::ensure_parent_dir;
use crate::app::ports::ReviewOutputPort;
use crate::error::{Result, ScraperError};
use crate::types::ReviewRecord;

/// Pretty-printed JSON array of records. serde_json leaves non-ASCII text unescaped.
pub struct JsonOutputAdapter {
    pub output_path: PathBuf,
}

impl JsonOutputAdapter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn records_to_json(records: &[ReviewRecord]) -> Result<String> {
        let mut json = serde_json::to_string_pretty(records)?;
        json.push('\n');
        Ok(json)
    }
}

impl ReviewOutputPort for JsonOutputAdapter {
    fn sink_name(&self) -> &'static str {
        "json"
    }

    fn path(&self) -> &Path {
        &self.output_path
    }

    fn write_records(&self, records: &[ReviewRecord]) -> Result<()> {
        ensure_parent_dir(&self.output_path)?;
        let json = Self::records_to_json(records)?;
        fs::write(&self.output_path, json).map_err(|source| ScraperError::Output {
            path: self.output_path.clone(),
            source,
        })?;
        debug!("JSON records written: {}", records.len());
        Ok(())
    }
}
