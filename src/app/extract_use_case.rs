use std::fs;
use std::path::Path;
use tracing::{error, info, instrument};

use crate::app::ports::ReviewOutputPort;
use crate::config::Config;
use crate::error::{Result, ScraperError};
use crate::infra::{CsvOutputAdapter, JsonOutputAdapter};
use crate::observability::metrics;
use crate::parser::{Parser, ReviewPageParser};
use crate::types::ExtractionReport;

/// Reads one saved page, extracts its reviews and hands them to every output
pub struct ExtractReviewsUseCase {
    parser: Box<dyn Parser>,
    outputs: Vec<Box<dyn ReviewOutputPort>>,
}

impl ExtractReviewsUseCase {
    pub fn new(parser: Box<dyn Parser>, outputs: Vec<Box<dyn ReviewOutputPort>>) -> Self {
        Self { parser, outputs }
    }

    /// Default parser with the CSV and JSON adapters at the configured paths
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(ReviewPageParser::new()),
            vec![
                Box::new(CsvOutputAdapter::new(config.csv_path.clone())),
                Box::new(JsonOutputAdapter::new(config.json_path.clone())),
            ],
        )
    }

    #[instrument(skip(self, input), fields(input = %input.display()))]
    pub fn run(&self, input: &Path) -> Result<ExtractionReport> {
        let bytes = fs::read(input).map_err(|source| ScraperError::Input {
            path: input.to_path_buf(),
            source,
        })?;
        info!("Read {} bytes", bytes.len());

        let records = self.parser.parse(&bytes)?;

        let mut outputs = Vec::with_capacity(self.outputs.len());
        for output in &self.outputs {
            if let Err(e) = output.write_records(&records) {
                error!("Failed writing {} output: {}", output.sink_name(), e);
                metrics::output::write_error(output.sink_name());
                return Err(e);
            }
            metrics::output::records_written(output.sink_name(), records.len());
            info!(
                "Wrote {} records to {}",
                records.len(),
                output.path().display()
            );
            outputs.push(output.path().to_path_buf());
        }

        Ok(ExtractionReport {
            input_path: input.to_path_buf(),
            records_written: records.len(),
            outputs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReviewRecord;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    struct MockOutput {
        path: PathBuf,
        records: Arc<Mutex<Vec<ReviewRecord>>>,
        fail: bool,
    }

    impl MockOutput {
        fn new(fail: bool) -> Self {
            Self {
                path: PathBuf::from("mock.out"),
                records: Arc::new(Mutex::new(Vec::new())),
                fail,
            }
        }
    }

    impl ReviewOutputPort for MockOutput {
        fn sink_name(&self) -> &'static str {
            "mock"
        }

        fn path(&self) -> &Path {
            &self.path
        }

        fn write_records(&self, records: &[ReviewRecord]) -> Result<()> {
            if self.fail {
                return Err(ScraperError::Output {
                    path: self.path.clone(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
                });
            }
            self.records.lock().unwrap().extend_from_slice(records);
            Ok(())
        }
    }

    const PAGE: &str = r#"<html><body>
        <h1>Tasty Place</h1>
        <div data-test-target="HR_CC_CARD">
          <a href="/Profile/alice">Alice</a>
          <q data-test-target="review-text">Loved it</q>
        </div>
    </body></html>"#;

    #[test]
    fn test_run_hands_records_to_every_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("page.html");
        fs::write(&input, PAGE).unwrap();

        let first = MockOutput::new(false);
        let second = MockOutput::new(false);
        let (first_ref, second_ref) = (first.records.clone(), second.records.clone());
        let use_case = ExtractReviewsUseCase::new(
            Box::new(ReviewPageParser::new()),
            vec![Box::new(first), Box::new(second)],
        );

        let report = use_case.run(&input).unwrap();
        assert_eq!(report.records_written, 1);
        assert_eq!(report.outputs.len(), 2);
        assert_eq!(first_ref.lock().unwrap()[0].reviewer, "Alice");
        assert_eq!(*first_ref.lock().unwrap(), *second_ref.lock().unwrap());
    }

    #[test]
    fn test_run_missing_input_is_input_error() {
        let dir = TempDir::new().unwrap();
        let use_case = ExtractReviewsUseCase::new(Box::new(ReviewPageParser::new()), Vec::new());

        let err = use_case.run(&dir.path().join("missing.html")).unwrap_err();
        assert!(matches!(err, ScraperError::Input { .. }));
    }

    #[test]
    fn test_run_surfaces_output_failure() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("page.html");
        fs::write(&input, PAGE).unwrap();

        let use_case = ExtractReviewsUseCase::new(
            Box::new(ReviewPageParser::new()),
            vec![Box::new(MockOutput::new(true))],
        );
        assert!(matches!(
            use_case.run(&input),
            Err(ScraperError::Output { .. })
        ));
    }
}
