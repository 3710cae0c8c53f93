use std::env;
use std::time::Duration;

use anyhow::bail;
use clap::{Arg, Command};
use tracing::{error, info};

use crate::{
    render::render_itinerary, GeminiClient, ItineraryGenerator, ItineraryRequest, SUCCESS_STATUS,
};

/// CLI entry point for the budget-itinerary tool
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("budget-itinerary")
        .version("0.1.0")
        .about("Generate a budget student travel itinerary with Gemini structured output")
        .arg(
            Arg::new("destination")
                .help("Destination city and country, e.g. \"Rome, Italy\"")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("days")
                .short('d')
                .long("days")
                .value_name("DAYS")
                .help("Number of days for the trip (1-14)")
                .default_value("3"),
        )
        .arg(
            Arg::new("interests")
                .short('i')
                .long("interests")
                .value_name("INTERESTS")
                .help("Main interests, e.g. \"history, cheap food, local markets\"")
                .required(true),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("The Gemini model to use (or set GEMINI_MODEL env var)"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Gemini API key (or set GEMINI_API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Gemini API base URL (or set GEMINI_BASE_URL env var)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Per-attempt request timeout in seconds")
                .default_value("120"),
        )
        .get_matches();

    let destination = matches.get_one::<String>("destination").unwrap();
    let interests = matches.get_one::<String>("interests").unwrap();
    let days: u32 = matches.get_one::<String>("days").unwrap().parse()?;

    // Form-level validation; the generator itself does not validate inputs.
    if destination.trim().is_empty() {
        bail!("Please fill in a destination.");
    }
    if interests.trim().is_empty() {
        bail!("Please fill in at least one interest.");
    }
    if !(1..=14).contains(&days) {
        bail!("Number of days must be between 1 and 14 (got {days}).");
    }

    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("GEMINI_API_KEY").ok())
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Gemini API key is required. Set GEMINI_API_KEY environment variable or use --api-key"
            )
        })?;

    let timeout_seconds: u64 = matches.get_one::<String>("timeout").unwrap().parse()?;

    let mut client =
        GeminiClient::new(api_key).with_timeout(Duration::from_secs(timeout_seconds));
    if let Some(base_url) = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| env::var("GEMINI_BASE_URL").ok())
    {
        client.set_base_url(base_url);
    }
    if let Some(model) = matches
        .get_one::<String>("model")
        .cloned()
        .or_else(|| env::var("GEMINI_MODEL").ok())
    {
        client = client.with_model(model);
    }

    let generator = ItineraryGenerator::new(client);
    let request = ItineraryRequest::new(destination.clone(), days, interests.clone());

    info!(destination = %request.destination, days = request.days, "generating itinerary");

    match generator.generate(&request).await {
        Ok(itinerary) => {
            println!("{SUCCESS_STATUS}\n");
            println!("{}", render_itinerary(&itinerary));
            info!("itinerary generation completed successfully");
            Ok(())
        }
        Err(err) => {
            error!("itinerary generation failed: {err}");
            Err(err.into())
        }
    }
}
