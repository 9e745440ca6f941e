use async_trait::async_trait;
use feedback_reply::core::models::{FeedbackInput, Sentiment, SentimentResult};
use feedback_reply::sentiment::{LexiconClassifier, SentimentClassifier, classify_or_fallback};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

fn input(feedback: &str, rating: Option<f64>) -> FeedbackInput {
    FeedbackInput {
        feedback: feedback.to_string(),
        price: None,
        rating,
    }
}

struct NeverResolves;

#[async_trait]
impl SentimentClassifier for NeverResolves {
    async fn classify(&self, _input: &FeedbackInput) -> anyhow::Result<SentimentResult> {
        futures::future::pending().await
    }
}

struct SlowClassifier {
    finished: Arc<AtomicBool>,
}

#[async_trait]
impl SentimentClassifier for SlowClassifier {
    async fn classify(&self, _input: &FeedbackInput) -> anyhow::Result<SentimentResult> {
        tokio::time::sleep(Duration::from_secs(12)).await;
        self.finished.store(true, Ordering::SeqCst);
        Ok(SentimentResult {
            sentiment: Sentiment::Positive,
            confidence: 99,
            rating: 5,
        })
    }
}

struct Failing;

#[async_trait]
impl SentimentClassifier for Failing {
    async fn classify(&self, _input: &FeedbackInput) -> anyhow::Result<SentimentResult> {
        anyhow::bail!("model unavailable")
    }
}

#[test]
fn test_lexicon_positive_feedback() {
    let result = LexiconClassifier::score(&input("I love it, fast delivery", None));
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.confidence, 70);
    assert_eq!(result.rating, 5);
}

#[test]
fn test_lexicon_negation_flips_polarity() {
    let result = LexiconClassifier::score(&input("It was not good", None));
    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.confidence, 60);
    assert_eq!(result.rating, 2);
}

#[test]
fn test_lexicon_neutral_feedback() {
    let result = LexiconClassifier::score(&input("The box arrived on Tuesday.", None));
    assert_eq!(
        result,
        SentimentResult {
            sentiment: Sentiment::Neutral,
            confidence: 50,
            rating: 3,
        }
    );
}

#[test]
fn test_lexicon_uses_supplied_rating() {
    let result = LexiconClassifier::score(&input("The box arrived.", Some(4.6)));
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.rating, 5);

    let result = LexiconClassifier::score(&input("Great colour but broken and slow", Some(1.0)));
    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.rating, 1);
}

#[test]
fn test_normalize_rating() {
    assert_eq!(LexiconClassifier::normalize_rating(Some(9.0)), Some(5));
    assert_eq!(LexiconClassifier::normalize_rating(Some(-3.0)), Some(1));
    assert_eq!(LexiconClassifier::normalize_rating(Some(2.4)), Some(2));
    assert_eq!(LexiconClassifier::normalize_rating(Some(f64::NAN)), None);
    assert_eq!(LexiconClassifier::normalize_rating(None), None);
}

#[tokio::test]
async fn test_lexicon_rejects_empty_feedback() {
    let classifier = LexiconClassifier::new();
    assert!(classifier.classify(&input("   ", None)).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_classifier_timeout_yields_fallback() {
    let started = tokio::time::Instant::now();
    let classifier: Arc<dyn SentimentClassifier> = Arc::new(NeverResolves);
    let result = classify_or_fallback(
        &classifier,
        &input("anything", None),
        Duration::from_millis(9000),
    )
    .await;

    assert_eq!(result, SentimentResult::FALLBACK);
    assert!(started.elapsed() >= Duration::from_millis(9000));
}

#[tokio::test]
async fn test_classifier_error_yields_fallback() {
    let classifier: Arc<dyn SentimentClassifier> = Arc::new(Failing);
    let result = classify_or_fallback(
        &classifier,
        &input("anything", None),
        Duration::from_millis(9000),
    )
    .await;

    assert_eq!(result, SentimentResult::FALLBACK);
}

#[tokio::test(start_paused = true)]
async fn test_late_classifier_keeps_running_but_is_ignored() {
    let finished = Arc::new(AtomicBool::new(false));
    let classifier: Arc<dyn SentimentClassifier> = Arc::new(SlowClassifier {
        finished: finished.clone(),
    });

    let result = classify_or_fallback(
        &classifier,
        &input("anything", None),
        Duration::from_millis(9000),
    )
    .await;

    assert_eq!(result, SentimentResult::FALLBACK);
    assert!(!finished.load(Ordering::SeqCst));

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(
        finished.load(Ordering::SeqCst),
        "abandoned classifier should run to completion"
    );
    assert_eq!(result, SentimentResult::FALLBACK);
}
