/// Feedback Reply - A Lambda that classifies customer feedback sentiment and
/// drafts a customer-facing reply.
///
/// Each request is classified, then answered either from a static template
/// (offline mode) or with a reply generated by the Gemini API. Every failure
/// degrades to the static template; the endpoint always answers 200.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (`lambda_runtime`) behind API Gateway or a Function URL
/// - A pluggable `SentimentClassifier`, with a word-list default
/// - reqwest for the Gemini `generateContent` API
/// - Tokio timers to bound each external stage
///
/// # Example
///
/// ```no_run
/// use feedback_reply::api::FeedbackHandler;
/// use feedback_reply::core::config::AppConfig;
/// use feedback_reply::core::models::FeedbackInput;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     feedback_reply::setup_logging();
///
///     let handler = FeedbackHandler::from_config(AppConfig::from_env()?)?;
///     let payload = handler
///         .respond(&FeedbackInput {
///             feedback: "Arrived quickly and works great".to_string(),
///             price: Some(19.99),
///             rating: Some(5.0),
///         })
///         .await;
///
///     println!("{} -> {}", payload.sentiment, payload.customer_response);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod reply;
pub mod sentiment;

pub use errors::FeedbackError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. The level comes from `RUST_LOG`, defaulting to `info`. Calling it
/// more than once is harmless.
///
/// # Example
///
/// ```
/// feedback_reply::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
