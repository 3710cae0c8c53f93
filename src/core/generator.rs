use std::time::Duration;

use tracing::{debug, warn};

use crate::{
    core::prompt,
    error::{PlannerError, Result},
    schemas::response_schema,
    services::GeminiClient,
    types::{Itinerary, ItineraryRequest},
};

/// Status line reported alongside a successful generation.
pub const SUCCESS_STATUS: &str = "Itinerary generated successfully!";

/// Retry policy for the generation loop.
///
/// Passed in explicitly so tests can shrink the delays without touching
/// process-wide state. Defaults match the production policy: 5 attempts,
/// delays of 1, 2, 4, 8 seconds between them.
#[derive(Clone, Copy, Debug)]
pub struct RetryConfig {
    pub max_attempts: usize,
    pub initial_delay: Duration,
    pub backoff_factor: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_secs(1),
            backoff_factor: 2,
        }
    }
}

impl RetryConfig {
    /// Delay slept after the given zero-based attempt, before the next one.
    pub fn backoff_delay(&self, attempt: usize) -> Duration {
        self.initial_delay * self.backoff_factor.pow(attempt as u32)
    }
}

/// Retrying itinerary generator over a [`GeminiClient`].
///
/// Transport failures and unparseable responses are retried identically
/// under the backoff policy; a missing credential fails immediately with
/// zero network calls, and only exhaustion is surfaced after that.
#[derive(Clone, Debug)]
pub struct ItineraryGenerator {
    client: GeminiClient,
    retry: RetryConfig,
}

impl ItineraryGenerator {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Build a generator from `GEMINI_API_KEY` (required), with optional
    /// `GEMINI_BASE_URL` and `GEMINI_MODEL` overrides. There is no fallback
    /// credential: an absent or empty key is a configuration error.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(PlannerError::Config(
                "GEMINI_API_KEY is missing. Please set it as an environment variable.".to_string(),
            ));
        }

        let mut client = GeminiClient::new(api_key);
        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            client.set_base_url(base_url);
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            client = client.with_model(model);
        }

        Ok(Self::new(client))
    }

    pub fn retry_config(&self) -> RetryConfig {
        self.retry
    }

    /// Generate a structured itinerary for the given trip parameters.
    ///
    /// The same request (prompt + schema) is reused across attempts; there
    /// is no prompt repair between retries.
    pub async fn generate(&self, request: &ItineraryRequest) -> Result<Itinerary> {
        if self.client.api_key().trim().is_empty() {
            return Err(PlannerError::Config(
                "GEMINI_API_KEY is missing. Please set it as an environment variable.".to_string(),
            ));
        }

        let system_instruction = prompt::system_instruction();
        let user_query = prompt::user_query(request);
        let schema = response_schema();

        let mut last_error = "Unknown error occurred before first API call.".to_string();

        for attempt in 0..self.retry.max_attempts {
            debug!(attempt = attempt + 1, "attempting itinerary generation");

            match self
                .client
                .generate_content(system_instruction, &user_query, &schema)
                .await
                .and_then(|text| parse_itinerary(&text))
            {
                Ok(itinerary) => {
                    if itinerary.len() != request.days as usize {
                        // Day count is a prompt-level request the service is
                        // trusted, not guaranteed, to honor.
                        warn!(
                            requested = request.days,
                            returned = itinerary.len(),
                            "itinerary day count differs from request"
                        );
                    }
                    return Ok(itinerary);
                }
                Err(err) => {
                    warn!(attempt = attempt + 1, error = %err, "generation attempt failed");
                    last_error = err.to_string();
                }
            }

            if attempt + 1 < self.retry.max_attempts {
                let delay = self.retry.backoff_delay(attempt);
                debug!(delay_ms = delay.as_millis() as u64, "backing off before retry");
                tokio::time::sleep(delay).await;
            }
        }

        Err(PlannerError::Exhausted {
            attempts: self.retry.max_attempts,
            last_error,
        })
    }
}

/// Decode the candidate text into the itinerary shape, reporting the JSON
/// path of the first mismatch.
fn parse_itinerary(text: &str) -> Result<Itinerary> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() {
            "<root>".to_string()
        } else {
            path
        };
        PlannerError::ResponseFormat(format!(
            "Failed to parse JSON response at {}: {}",
            location, err
        ))
    })
}
