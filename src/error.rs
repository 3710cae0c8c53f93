use thiserror::Error;

/// Main error type for the itinerary planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Gemini API connection error: {0}")]
    Transport(String),

    #[error("AI response format error: {0}")]
    ResponseFormat(String),

    #[error("Failed to generate itinerary after {attempts} attempts. Last known error: {last_error}")]
    Exhausted { attempts: usize, last_error: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Check if this error is retryable within a generation run
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PlannerError::Transport(_) | PlannerError::ResponseFormat(_)
        )
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Transport(_) => "TRANSPORT_ERROR",
            PlannerError::ResponseFormat(_) => "RESPONSE_FORMAT_ERROR",
            PlannerError::Exhausted { .. } => "EXHAUSTED_RETRIES",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "retryable": self.is_retryable()
            }
        })
    }
}
