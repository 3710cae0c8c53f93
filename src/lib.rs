//! budget-itinerary-rs: a budget student travel planner backed by Gemini
//! structured output
//!
//! This library builds a schema-constrained itinerary request (system
//! instruction + user prompt + response schema), sends it to the Gemini
//! `generateContent` endpoint, retries transport and response-format
//! failures under exponential backoff, and returns a typed multi-day plan.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use budget_itinerary_rs::{ItineraryGenerator, ItineraryRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = ItineraryGenerator::from_env()?;
//!     let request = ItineraryRequest::new("Rome, Italy", 3, "history, cheap food");
//!
//!     let itinerary = generator.generate(&request).await?;
//!     println!("total: ${:.2}", itinerary.total_cost());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod render;
pub mod schemas;
pub mod services;
pub mod types;

pub use core::{ItineraryGenerator, RetryConfig, SUCCESS_STATUS};
pub use error::{PlannerError, Result};
pub use render::{format_usd, render_itinerary};
pub use schemas::response_schema;
pub use services::GeminiClient;
pub use types::{Itinerary, ItineraryActivity, ItineraryDay, ItineraryRequest};

#[cfg(feature = "cli")]
pub mod cli;
