use std::fs;

use review_scraper::app::ExtractReviewsUseCase;
use review_scraper::config::Config;
use review_scraper::constants::FIELD_NAMES;
use review_scraper::{ReviewRecord, ScraperError};
use tempfile::tempdir;

const NO_OVERALL_RATING: &str = include_str!("fixtures/no_overall_rating.html");

fn config_in(dir: &std::path::Path) -> Config {
    Config {
        input_path: dir.join("page.html"),
        csv_path: dir.join("out/parsed.csv"),
        json_path: dir.join("out/parsed.json"),
        ..Config::default()
    }
}

#[test]
fn test_csv_and_json_agree() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let config = config_in(dir.path());
    fs::write(&config.input_path, NO_OVERALL_RATING)?;

    let report = ExtractReviewsUseCase::from_config(&config).run(&config.input_path)?;
    assert_eq!(report.records_written, 2);
    assert_eq!(report.outputs, vec![config.csv_path.clone(), config.json_path.clone()]);

    let mut reader = csv::Reader::from_path(&config.csv_path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    assert_eq!(headers, FIELD_NAMES);
    let from_csv: Vec<ReviewRecord> = reader.deserialize().collect::<Result<Vec<ReviewRecord>, csv::Error>>()?;

    let from_json: Vec<ReviewRecord> =
        serde_json::from_str(&fs::read_to_string(&config.json_path)?)?;

    assert_eq!(from_csv, from_json);
    assert_eq!(from_csv[0].reviewer, "Bob W");
    assert_eq!(from_csv[1].reviewer, "Carla");
    assert!(fs::read_to_string(&config.json_path)?.contains("Crème brûlée"));
    Ok(())
}

#[test]
fn test_empty_input_writes_empty_outputs() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let config = config_in(dir.path());
    fs::write(&config.input_path, "")?;

    let report = ExtractReviewsUseCase::from_config(&config).run(&config.input_path)?;
    assert_eq!(report.records_written, 0);
    assert_eq!(
        fs::read_to_string(&config.csv_path)?,
        "business_name,overall_rating,reviewer,rating,date,text\n"
    );
    assert_eq!(fs::read_to_string(&config.json_path)?, "[]\n");
    Ok(())
}

#[test]
fn test_unparseable_input_writes_nothing() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let config = config_in(dir.path());
    let utf16: Vec<u8> = NO_OVERALL_RATING
        .encode_utf16()
        .flat_map(|unit| unit.to_le_bytes())
        .collect();
    fs::write(&config.input_path, utf16)?;

    let err = ExtractReviewsUseCase::from_config(&config)
        .run(&config.input_path)
        .unwrap_err();
    assert!(matches!(err, ScraperError::Parse(_)));
    assert!(!config.csv_path.exists());
    assert!(!config.json_path.exists());
    Ok(())
}
