use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};

use crate::core::models::FeedbackInput;
use crate::errors::FeedbackError;

/// Pulls the JSON request body out of an API Gateway / Function URL event.
///
/// Direct invocations that pass the request object itself (no `body` key)
/// are accepted as-is.
pub fn extract_body(payload: &Value) -> Result<Value, FeedbackError> {
    let Some(body) = payload.get("body") else {
        if payload.get("feedback").is_some() {
            return Ok(payload.clone());
        }
        return Err(FeedbackError::RequestMalformed("missing body".to_string()));
    };

    match body {
        Value::String(raw) => {
            let is_base64 = payload
                .get("isBase64Encoded")
                .and_then(Value::as_bool)
                .unwrap_or(false);

            if is_base64 {
                let bytes = STANDARD.decode(raw.trim())?;
                let decoded = String::from_utf8(bytes).map_err(|e| {
                    FeedbackError::RequestMalformed(format!("body is not UTF-8: {}", e))
                })?;
                Ok(serde_json::from_str(&decoded)?)
            } else {
                Ok(serde_json::from_str(raw)?)
            }
        }
        Value::Object(_) => Ok(body.clone()),
        Value::Null => Err(FeedbackError::RequestMalformed("missing body".to_string())),
        _ => Err(FeedbackError::RequestMalformed(
            "invalid body format".to_string(),
        )),
    }
}

fn number_field(obj: &Map<String, Value>, name: &str) -> Result<Option<f64>, FeedbackError> {
    match obj.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s.trim().parse::<f64>().map(Some).map_err(|_| {
            FeedbackError::RequestMalformed(format!("{} is not a number: {:?}", name, s))
        }),
        Some(other) => Err(FeedbackError::RequestMalformed(format!(
            "{} has unsupported type: {}",
            name, other
        ))),
    }
}

pub fn parse_feedback_input(body: &Value) -> Result<FeedbackInput, FeedbackError> {
    let Some(obj) = body.as_object() else {
        return Err(FeedbackError::RequestMalformed(
            "request body must be a JSON object".to_string(),
        ));
    };

    let feedback = obj
        .get("feedback")
        .and_then(Value::as_str)
        .filter(|f| !f.trim().is_empty())
        .ok_or_else(|| {
            FeedbackError::RequestMalformed("feedback must be a non-empty string".to_string())
        })?;

    Ok(FeedbackInput {
        feedback: feedback.to_string(),
        price: number_field(obj, "price")?,
        rating: number_field(obj, "rating")?,
    })
}

/// Event payload → validated input.
pub fn parse_request(payload: &Value) -> Result<FeedbackInput, FeedbackError> {
    let body = extract_body(payload)?;
    parse_feedback_input(&body)
}
