pub mod extract_use_case;
pub mod ports;

pub use extract_use_case::ExtractReviewsUseCase;
pub use ports::ReviewOutputPort;
