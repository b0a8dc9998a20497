use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One extracted review, flattened with the page-level values it came from.
///
/// Field declaration order is the column order of every output; serde
/// serializes struct fields in declaration order for both CSV and JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub business_name: String,
    pub overall_rating: String,
    pub reviewer: String,
    pub rating: String,
    pub date: String,
    pub text: String,
}

impl ReviewRecord {
    pub fn new(page: &PageSummary, card: CardFields) -> Self {
        Self {
            business_name: page.business_name.clone(),
            overall_rating: page.overall_rating.clone(),
            reviewer: card.reviewer,
            rating: card.rating,
            date: card.date,
            text: card.text,
        }
    }
}

/// Values read once per document and repeated on every record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSummary {
    pub business_name: String,
    pub overall_rating: String,
}

/// Per-card fields, each already normalized
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFields {
    pub reviewer: String,
    pub rating: String,
    pub date: String,
    pub text: String,
}

impl CardFields {
    /// Cards without a reviewer or a body are layout noise (ads, placeholders).
    pub fn is_noise(&self) -> bool {
        self.reviewer.is_empty() && self.text.is_empty()
    }
}

/// Result of one extraction run
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub input_path: PathBuf,
    pub records_written: usize,
    pub outputs: Vec<PathBuf>,
}
