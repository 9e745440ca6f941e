//! Composes the customer-facing `ResponsePayload`.

pub mod parser;
pub mod templates;

use crate::core::models::{GeneratedReply, ResponsePayload, SentimentResult};
use parser::ParsedReply;

/// Error text surfaced when the request could not be handled at all.
pub const SERVER_ERROR: &str = "Server error";

/// Turns parsed model output into a reply. A missing `RESPONSE:` section
/// falls back to the static template for the detected sentiment.
pub fn generated_reply(result: &SentimentResult, parsed: ParsedReply) -> GeneratedReply {
    GeneratedReply {
        customer_response: parsed
            .response
            .unwrap_or_else(|| templates::fallback_reply(result.sentiment).to_string()),
        key_insights: parsed.key_insights,
        keywords: parsed.keywords,
    }
}

/// Static-template payload used for the short-circuit and every degraded path.
pub fn offline_payload(result: &SentimentResult) -> ResponsePayload {
    ResponsePayload {
        sentiment: result.sentiment,
        confidence: result.confidence,
        rating: result.rating,
        customer_response: templates::fallback_reply(result.sentiment).to_string(),
        key_insights: Vec::new(),
        keywords: Vec::new(),
        offline: true,
        error: None,
    }
}

pub fn online_payload(result: &SentimentResult, reply: GeneratedReply) -> ResponsePayload {
    ResponsePayload {
        sentiment: result.sentiment,
        confidence: result.confidence,
        rating: result.rating,
        customer_response: reply.customer_response,
        key_insights: reply.key_insights,
        keywords: reply.keywords,
        offline: false,
        error: None,
    }
}

/// Payload returned when the request itself could not be processed.
pub fn server_error_payload() -> ResponsePayload {
    ResponsePayload {
        error: Some(SERVER_ERROR.to_string()),
        ..offline_payload(&SentimentResult::FALLBACK)
    }
}
