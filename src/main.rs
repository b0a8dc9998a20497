use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use review_scraper::app::ExtractReviewsUseCase;
use review_scraper::config::Config;
use review_scraper::observability;

/// Input and output locations come from config.toml, not flags.
#[derive(Parser)]
#[command(name = "review_scraper")]
#[command(about = "Extract restaurant reviews from a saved listing page into CSV and JSON")]
#[command(version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    dotenv::dotenv().ok();

    let config = Config::load().context("loading configuration")?;
    observability::init_logging(&config.log_dir);
    info!(?config, "Starting review extraction");

    let use_case = ExtractReviewsUseCase::from_config(&config);
    let report = match use_case.run(&config.input_path) {
        Ok(report) => report,
        Err(e) => {
            error!("Extraction failed: {}", e);
            return Err(e).with_context(|| {
                format!("extracting reviews from {}", config.input_path.display())
            });
        }
    };

    println!(
        "wrote {} reviews to {} and {}",
        report.records_written,
        config.csv_path.display(),
        config.json_path.display()
    );
    Ok(())
}
