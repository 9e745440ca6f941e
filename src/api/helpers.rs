//! Response builders for the Lambda proxy integration.

use serde_json::{Value, json};
use tracing::error;

use crate::core::models::ResponsePayload;
use crate::reply::SERVER_ERROR;

/// Wraps a payload in a 200 proxy response. This endpoint never answers
/// with any other status.
#[must_use]
pub fn ok_payload(payload: &ResponsePayload) -> Value {
    let body = serde_json::to_string(payload).unwrap_or_else(|e| {
        error!("Failed to serialize response payload: {}", e);
        json!({ "error": SERVER_ERROR }).to_string()
    });

    json!({
        "statusCode": 200,
        "headers": { "Content-Type": "application/json" },
        "body": body
    })
}
