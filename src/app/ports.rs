use std::path::Path;

use crate::error::Result;
use crate::types::ReviewRecord;

/// Destination for the extracted record sequence
pub trait ReviewOutputPort {
    /// Short label used in logs and metrics ("csv", "json")
    fn sink_name(&self) -> &'static str;

    fn path(&self) -> &Path;

    /// Write the full sequence, replacing any previous file content.
    fn write_records(&self, records: &[ReviewRecord]) -> Result<()>;
}
