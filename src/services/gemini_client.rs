use std::time::Duration;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::{PlannerError, Result};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Single-attempt client for the Gemini `generateContent` endpoint.
///
/// Retry policy lives in the generator; this client issues exactly one
/// request per call and maps failures to `Transport`/`ResponseFormat`.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.set_base_url(base_url);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one structured-output request and return the candidate text.
    pub async fn generate_content(
        &self,
        system_instruction: &str,
        user_query: &str,
        response_schema: &Value,
    ) -> Result<String> {
        // Per-attempt timeout so a hung connection cannot block a run forever.
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| PlannerError::Transport(format!("Failed to build HTTP client: {err}")))?;

        let request_url = build_generate_url(&self.base_url, &self.model);
        let body = json!({
            "system_instruction": {
                "parts": [{ "text": system_instruction }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": user_query }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema
            }
        });

        debug!(model = %self.model, url = %request_url, "sending generateContent request");

        let response = client
            .post(&request_url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|err| PlannerError::Transport(format!("HTTP request failed: {err}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|err| PlannerError::Transport(format!("Failed to read response: {err}")))?;

        if !status.is_success() {
            let api_message = serde_json::from_str::<Value>(&response_text)
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(|error| error.get("message"))
                        .and_then(|value| value.as_str())
                        .map(|s| s.to_string())
                })
                .unwrap_or(response_text);

            return Err(PlannerError::Transport(format!(
                "HTTP {} error: {}",
                status, api_message
            )));
        }

        let response_json: Value = serde_json::from_str(&response_text).map_err(|err| {
            PlannerError::ResponseFormat(format!("Failed to parse response envelope: {err}"))
        })?;

        if let Some(error) = response_json.get("error") {
            let error_message = error
                .get("message")
                .and_then(|value| value.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| error.to_string());
            return Err(PlannerError::Transport(format!(
                "API error: {}",
                error_message
            )));
        }

        extract_candidate_text(&response_json)
    }
}

fn build_generate_url(base_url: &str, model: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    format!("{}/models/{}:generateContent", trimmed, model)
}

/// Pull the generated text out of the first candidate.
fn extract_candidate_text(response: &Value) -> Result<String> {
    response
        .get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.get(0))
        .and_then(|part| part.get("text"))
        .and_then(|text| text.as_str())
        .map(|text| text.to_string())
        .ok_or_else(|| {
            PlannerError::ResponseFormat(
                "response contained no candidate text part".to_string(),
            )
        })
}
