pub mod generator;
pub mod prompt;

pub use generator::{ItineraryGenerator, RetryConfig, SUCCESS_STATUS};
