use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "review_scraper=info";

/// Initializes logging with a JSON file layer under `log_dir` and a console layer.
///
/// The console layer writes to stderr; stdout carries only the run summary.
pub fn init_logging(log_dir: &str) {
    // Ensure logs directory exists
    let _ = fs::create_dir_all(log_dir);

    let file_appender = tracing_appender::rolling::daily(log_dir, "review_scraper.log");
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    // Keep the worker alive for the life of the process so buffered lines flush
    std::mem::forget(guard);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_logging_creates_log_dir_and_tolerates_reinit() {
        let dir = TempDir::new().unwrap();
        let log_dir = dir.path().join("logs");
        let log_dir = log_dir.to_str().unwrap();

        init_logging(log_dir);
        init_logging(log_dir);
        tracing::info!("logging initialized");

        assert!(std::path::Path::new(log_dir).is_dir());
    }
}
