pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod infra;
pub mod observability;
pub mod parser;
pub mod types;

pub use error::{Result, ScraperError};
pub use types::ReviewRecord;
