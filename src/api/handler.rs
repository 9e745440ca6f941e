//! Feedback Lambda handler.
//!
//! Per request:
//! - parse the proxy event into a `FeedbackInput`
//! - classify sentiment (deadline-guarded, neutral fallback)
//! - short-circuit to a static reply when offline, otherwise ask Gemini
//! - degrade to the static reply on any generative failure
//!
//! Every path ends in a 200 response carrying a `ResponsePayload`.

use futures::FutureExt;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::ai::{GeminiClient, ReplyGenerator};
use crate::core::config::AppConfig;
use crate::core::models::{FeedbackInput, ResponsePayload};
use crate::core::timeout::with_deadline;
use crate::errors::FeedbackError;
use crate::prompt::build_reply_prompt;
use crate::reply::{self, parser::parse_reply};
use crate::sentiment::{LexiconClassifier, SentimentClassifier, classify_or_fallback};

#[derive(Clone)]
pub struct FeedbackHandler {
    config: Arc<AppConfig>,
    classifier: Arc<dyn SentimentClassifier>,
    generator: Option<Arc<dyn ReplyGenerator>>,
}

impl FeedbackHandler {
    pub fn new(
        config: AppConfig,
        classifier: Arc<dyn SentimentClassifier>,
        generator: Option<Arc<dyn ReplyGenerator>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            classifier,
            generator,
        }
    }

    /// Production wiring: lexicon classifier plus Gemini when a key is set.
    pub fn from_config(config: AppConfig) -> Result<Self, FeedbackError> {
        let generator = GeminiClient::from_config(&config)?
            .map(|client| Arc::new(client) as Arc<dyn ReplyGenerator>);

        Ok(Self::new(
            config,
            Arc::new(LexiconClassifier::new()),
            generator,
        ))
    }

    /// Produces the payload for an already-validated input.
    pub async fn respond(&self, input: &FeedbackInput) -> ResponsePayload {
        let deadline = self.config.stage_timeout;
        let result = classify_or_fallback(&self.classifier, input, deadline).await;

        let generator = match &self.generator {
            Some(generator) if !self.config.offline_only() => generator,
            _ => {
                info!(
                    mode = ?self.config.deployment_mode,
                    has_api_key = self.config.gemini_api_key.is_some(),
                    "Offline mode, answering from static template"
                );
                return reply::offline_payload(&result);
            }
        };

        let prompt = build_reply_prompt(result.sentiment, input);
        let generator = Arc::clone(generator);
        let outcome = with_deadline(deadline, async move { generator.generate(&prompt).await })
            .await
            .and_then(|r| r);

        match outcome {
            Ok(text) => {
                let parsed = parse_reply(&text);
                info!(
                    insights = parsed.key_insights.len(),
                    keywords = parsed.keywords.len(),
                    has_response = parsed.response.is_some(),
                    "Generated reply parsed"
                );
                reply::online_payload(&result, reply::generated_reply(&result, parsed))
            }
            Err(FeedbackError::GenerativeBadStatus { status, body }) => {
                error!(status, body = %body, "Gemini API returned an error status");
                reply::offline_payload(&result)
            }
            Err(e) => {
                warn!(error = %e, "Reply generation failed, using static template");
                reply::offline_payload(&result)
            }
        }
    }

    async fn process(&self, payload: &Value) -> ResponsePayload {
        match parsing::parse_request(payload) {
            Ok(input) => self.respond(&input).await,
            Err(e) => {
                error!(error = %e, "Rejecting malformed feedback request");
                reply::server_error_payload()
            }
        }
    }

    /// Outermost boundary: malformed input and panics both become a
    /// degraded payload with `error` set.
    pub async fn handle_payload(&self, payload: &Value) -> Value {
        let response = AssertUnwindSafe(self.process(payload))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| {
                error!("Unhandled panic while processing feedback request");
                reply::server_error_payload()
            });

        helpers::ok_payload(&response)
    }

    /// Lambda entrypoint.
    pub async fn handle_event(&self, event: LambdaEvent<Value>) -> Result<Value, Error> {
        let request_id = Some(event.context.request_id.as_str())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let span = info_span!("feedback_request", request_id = %request_id);
        Ok(self.handle_payload(&event.payload).instrument(span).await)
    }
}
