pub mod csv_output_adapter;
pub mod json_output_adapter;

pub use csv_output_adapter::CsvOutputAdapter;
pub use json_output_adapter::JsonOutputAdapter;

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, ScraperError};

/// Create the parent directory of an output file if it is missing
pub(crate) fn ensure_parent_dir(file_path: &Path) -> Result<()> {
    if let Some(parent_dir) = file_path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            fs::create_dir_all(parent_dir).map_err(|source| ScraperError::Output {
                path: parent_dir.to_path_buf(),
                source,
            })?;
            debug!("Created output directory: {:?}", parent_dir);
        }
    }
    Ok(())
}
