use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Sentiment classifier failed: {0}")]
    ClassifierFailure(String),

    #[error("Operation timed out after {0} ms")]
    Timeout(u64),

    #[error("Background task aborted: {0}")]
    TaskAborted(String),

    #[error("Failed to reach generative API: {0}")]
    GenerativeNetworkFailure(String),

    #[error("Generative API returned status {status}: {body}")]
    GenerativeBadStatus { status: u16, body: String },

    #[error("Unexpected generative API response: {0}")]
    GenerativeMalformedBody(String),

    #[error("Malformed request: {0}")]
    RequestMalformed(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for FeedbackError {
    fn from(error: reqwest::Error) -> Self {
        FeedbackError::GenerativeNetworkFailure(error.without_url().to_string())
    }
}

impl From<serde_json::Error> for FeedbackError {
    fn from(error: serde_json::Error) -> Self {
        FeedbackError::RequestMalformed(error.to_string())
    }
}

impl From<base64::DecodeError> for FeedbackError {
    fn from(error: base64::DecodeError) -> Self {
        FeedbackError::RequestMalformed(format!("invalid base64 body: {}", error))
    }
}

impl From<anyhow::Error> for FeedbackError {
    fn from(error: anyhow::Error) -> Self {
        FeedbackError::ClassifierFailure(error.to_string())
    }
}
