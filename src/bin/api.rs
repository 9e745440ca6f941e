use feedback_reply::api::FeedbackHandler;
use feedback_reply::core::config::AppConfig;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    feedback_reply::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!(
        offline_only = config.offline_only(),
        model = %config.gemini_model,
        "Starting feedback reply Lambda"
    );

    let handler = FeedbackHandler::from_config(config).map_err(|e| {
        error!("Handler initialization error: {}", e);
        Error::from(e)
    })?;

    run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = handler.clone();
        async move { handler.handle_event(event).await }
    }))
    .await
}
