pub mod reviews;
pub mod text;

use scraper::Html;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::{Result, ScraperError};
use crate::observability::metrics;
use crate::types::ReviewRecord;

pub use reviews::{
    extract, extract_card, find_business_name, find_overall_rating, find_page_summary,
    find_review_cards,
};
pub use text::{collapse_whitespace, extract_rating, normalize_text, strip_reviewed_prefix};

pub trait Parser {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<ReviewRecord>>;
}

/// Share of NUL bytes at which input is treated as binary or UTF-16, not a page.
const MAX_NUL_RATIO: f64 = 0.25;

/// Decode raw page bytes and build the node tree.
///
/// Invalid UTF-8 is replaced rather than rejected, and stray NUL bytes are left
/// to the HTML parser. Empty input is an empty document with no reviews. Input
/// that is mostly NUL bytes (binary files, UTF-16 saves) is rejected.
pub fn parse_document(bytes: &[u8]) -> Result<Html> {
    let nul_count = bytes.iter().filter(|&&b| b == 0).count();
    if !bytes.is_empty() && nul_count as f64 / bytes.len() as f64 >= MAX_NUL_RATIO {
        return Err(ScraperError::Parse(format!(
            "{} of {} bytes are NUL; not a UTF-8 markup document",
            nul_count,
            bytes.len()
        )));
    }
    let body = String::from_utf8_lossy(bytes);
    Ok(Html::parse_document(&body))
}

/// Review extractor for saved restaurant listing pages.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReviewPageParser;

impl ReviewPageParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for ReviewPageParser {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<ReviewRecord>> {
        debug!("ReviewPageParser: start bytes_len={}", bytes.len());
        let started = Instant::now();

        let document = parse_document(bytes).inspect_err(|e| {
            warn!("ReviewPageParser: rejecting input: {}", e);
            metrics::parser::parse_error();
        })?;

        let cards = find_review_cards(&document).len();
        let records = extract(&document);

        metrics::parser::document_parsed(bytes.len(), started.elapsed().as_secs_f64());
        metrics::parser::cards_extracted(cards, records.len());

        if cards == 0 {
            warn!("ReviewPageParser: no review cards found - the page structure may have changed");
        } else {
            info!(
                "ReviewPageParser: extracted records={} from cards={}",
                records.len(),
                cards
            );
        }
        Ok(records)
    }
}
