use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::ensure_parent_dir;
use crate::app::ports::ReviewOutputPort;
use crate::constants::FIELD_NAMES;
use crate::error::{Result, ScraperError};
use crate::types::ReviewRecord;

/// Comma-separated output with a header row in the fixed field order.
/// Fields containing commas, quotes or line breaks are quoted.
pub struct CsvOutputAdapter {
    pub output_path: PathBuf,
}

impl CsvOutputAdapter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn io_error(&self, source: std::io::Error) -> ScraperError {
        ScraperError::Output {
            path: self.output_path.clone(),
            source,
        }
    }
}

impl ReviewOutputPort for CsvOutputAdapter {
    fn sink_name(&self) -> &'static str {
        "csv"
    }

    fn path(&self) -> &Path {
        &self.output_path
    }

    fn write_records(&self, records: &[ReviewRecord]) -> Result<()> {
        ensure_parent_dir(&self.output_path)?;
        let file = File::create(&self.output_path).map_err(|e| self.io_error(e))?;

        // Header written by hand so an empty page still yields a valid table
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .from_writer(file);
        writer.write_record(FIELD_NAMES)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush().map_err(|e| self.io_error(e))?;

        debug!("CSV rows written: {}", records.len());
        Ok(())
    }
}
