// Selector and path constants for the saved review page layout.
// Locators key off `data-test-target` and `aria-label`, never CSS classes.

// Page-level locators
pub const BUSINESS_NAME_SELECTOR: &str = r#"h1[data-test-target="top-info-header"]"#;
pub const FALLBACK_HEADING_SELECTOR: &str = "h1";
pub const BUBBLE_RATING_SELECTOR: &str = r#"[aria-label$=" of 5 bubbles"]"#;

// Review card locators
pub const REVIEW_CARD_SELECTOR: &str = r#"div[data-test-target="HR_CC_CARD"]"#;
pub const REVIEWER_SELECTOR: &str = r#"a[href*="/Profile/"]"#;
pub const REVIEW_DATE_SELECTOR: &str = r#"span[data-test-target="review-date"]"#;
pub const REVIEW_TEXT_SELECTOR: &str = r#"q[data-test-target="review-text"]"#;
pub const REVIEW_TEXT_FALLBACK_SELECTOR: &str = r#"span[data-test-target="review-text"]"#;

/// Elements whose text content never renders on the page.
pub const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Column order shared by the CSV header and the JSON object keys.
pub const FIELD_NAMES: [&str; 6] = [
    "business_name",
    "overall_rating",
    "reviewer",
    "rating",
    "date",
    "text",
];

// Default run configuration
pub const DEFAULT_INPUT_PATH: &str = "page.html";
pub const DEFAULT_CSV_PATH: &str = "parsed.csv";
pub const DEFAULT_JSON_PATH: &str = "parsed.json";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const CONFIG_PATH_ENV: &str = "REVIEW_SCRAPER_CONFIG";
