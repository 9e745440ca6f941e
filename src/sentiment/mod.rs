//! Sentiment classification behind a swappable collaborator trait.

pub mod lexicon;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::core::models::{FeedbackInput, SentimentResult};
use crate::core::timeout::with_deadline;
use crate::errors::FeedbackError;

pub use lexicon::LexiconClassifier;

#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, input: &FeedbackInput) -> anyhow::Result<SentimentResult>;
}

/// Runs the classifier under `deadline`, substituting
/// [`SentimentResult::FALLBACK`] on error or timeout. A classifier that
/// misses the deadline keeps running in the background.
pub async fn classify_or_fallback(
    classifier: &Arc<dyn SentimentClassifier>,
    input: &FeedbackInput,
    deadline: Duration,
) -> SentimentResult {
    let classifier = Arc::clone(classifier);
    let input = input.clone();
    let outcome = with_deadline(deadline, async move { classifier.classify(&input).await })
        .await
        .and_then(|r| r.map_err(FeedbackError::from));

    match outcome {
        Ok(result) => {
            info!(
                sentiment = %result.sentiment,
                confidence = result.confidence,
                rating = result.rating,
                "Sentiment classified"
            );
            result
        }
        Err(e) => {
            warn!(error = %e, "Sentiment analysis failed, using neutral fallback");
            SentimentResult::FALLBACK
        }
    }
}
