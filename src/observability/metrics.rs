//! Metric names and recording helpers for extraction runs.
//!
//! Recording goes through the `metrics` facade. Nothing is exported unless the
//! embedding program installs a recorder, so the calls are cheap no-ops in the
//! plain CLI.

use std::fmt;

/// Enum representing all metric names used in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Parser metrics
    ParserDocumentsParsed,
    ParserParseError,
    ParserDuration,
    ParserBytesProcessed,
    ParserCardsFound,
    ParserRecordsExtracted,
    ParserCardsDropped,

    // Output metrics
    OutputRecordsWritten,
    OutputWriteError,
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::ParserDocumentsParsed => "review_parser_documents_parsed_total",
            MetricName::ParserParseError => "review_parser_parse_error_total",
            MetricName::ParserDuration => "review_parser_duration_seconds",
            MetricName::ParserBytesProcessed => "review_parser_bytes_processed",
            MetricName::ParserCardsFound => "review_parser_cards_found",
            MetricName::ParserRecordsExtracted => "review_parser_records_extracted_total",
            MetricName::ParserCardsDropped => "review_parser_cards_dropped_total",
            MetricName::OutputRecordsWritten => "review_output_records_written_total",
            MetricName::OutputWriteError => "review_output_write_error_total",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [
            ParserDocumentsParsed,
            ParserParseError,
            ParserDuration,
            ParserBytesProcessed,
            ParserCardsFound,
            ParserRecordsExtracted,
            ParserCardsDropped,
            OutputRecordsWritten,
            OutputWriteError,
        ]
        .into_iter()
    }
}

// ============================================================================
// Parser Metrics
// ============================================================================

pub mod parser {
    use super::MetricName;

    pub fn document_parsed(bytes: usize, secs: f64) {
        ::metrics::counter!(MetricName::ParserDocumentsParsed.as_str()).increment(1);
        ::metrics::histogram!(MetricName::ParserBytesProcessed.as_str()).record(bytes as f64);
        ::metrics::histogram!(MetricName::ParserDuration.as_str()).record(secs);
    }

    pub fn parse_error() {
        ::metrics::counter!(MetricName::ParserParseError.as_str()).increment(1);
    }

    pub fn cards_extracted(cards: usize, records: usize) {
        ::metrics::histogram!(MetricName::ParserCardsFound.as_str()).record(cards as f64);
        ::metrics::counter!(MetricName::ParserRecordsExtracted.as_str()).increment(records as u64);
        ::metrics::counter!(MetricName::ParserCardsDropped.as_str())
            .increment(cards.saturating_sub(records) as u64);
    }
}

// ============================================================================
// Output Metrics
// ============================================================================

pub mod output {
    use super::MetricName;

    pub fn records_written(sink: &'static str, count: usize) {
        ::metrics::counter!(MetricName::OutputRecordsWritten.as_str(), "sink" => sink)
            .increment(count as u64);
    }

    pub fn write_error(sink: &'static str) {
        ::metrics::counter!(MetricName::OutputWriteError.as_str(), "sink" => sink).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_are_prefixed_and_unique() {
        let names: Vec<_> = MetricName::all_metrics().map(|m| m.as_str()).collect();
        assert_eq!(names.len(), 9);
        assert!(names.iter().all(|n| n.starts_with("review_")));

        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        parser::document_parsed(1024, 0.01);
        parser::cards_extracted(3, 2);
        output::records_written("csv", 2);
    }
}
