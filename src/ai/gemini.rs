//! Gemini `generateContent` client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use super::ReplyGenerator;
use crate::core::config::AppConfig;
use crate::errors::FeedbackError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Pulls `candidates[0].content.parts[0].text` out of a success body.
pub fn extract_candidate_text(body: &str) -> Result<String, FeedbackError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| FeedbackError::GenerativeMalformedBody(format!("invalid JSON: {}", e)))?;

    parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| FeedbackError::GenerativeMalformedBody("no candidate text".to_string()))
}

// ============================================================================
// Client
// ============================================================================

pub struct GeminiClient {
    http: Client,
    api_key: String,
    endpoint: Url,
}

impl GeminiClient {
    pub fn new(api_base: &Url, model: &str, api_key: String) -> Result<Self, FeedbackError> {
        let endpoint = Url::parse(&format!(
            "{}/models/{}:generateContent",
            api_base.as_str().trim_end_matches('/'),
            model
        ))
        .map_err(|e| FeedbackError::Config(format!("Gemini endpoint: {}", e)))?;

        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            http,
            api_key,
            endpoint,
        })
    }

    /// Returns `None` when no API key is configured.
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>, FeedbackError> {
        match &config.gemini_api_key {
            Some(key) => Self::new(&config.gemini_api_base, &config.gemini_model, key.clone())
                .map(Some),
            None => Ok(None),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ReplyGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, FeedbackError> {
        #[cfg(feature = "debug-logs")]
        debug!("Using Gemini prompt:\n{}", prompt);

        let request_body = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };

        info!(endpoint = %self.endpoint, "Requesting reply from Gemini");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        if !status.is_success() {
            return Err(FeedbackError::GenerativeBadStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!(bytes = body.len(), "Gemini response received");
        extract_candidate_text(&body)
    }
}
