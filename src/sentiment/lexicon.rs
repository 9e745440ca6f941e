use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use tracing::debug;

use super::SentimentClassifier;
use crate::core::models::{FeedbackInput, Sentiment, SentimentResult};

static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "good", "great", "excellent", "amazing", "awesome", "love", "loved", "loves", "perfect",
        "fantastic", "wonderful", "happy", "pleased", "satisfied", "recommend", "best", "fast",
        "quick", "friendly", "helpful", "beautiful", "nice", "easy", "reliable", "worth",
        "impressed", "delighted", "superb", "quality", "thanks", "thank",
    ]
    .into_iter()
    .collect()
});

static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bad", "terrible", "awful", "horrible", "hate", "hated", "poor", "broken", "slow", "late",
        "worst", "disappointed", "disappointing", "refund", "damaged", "defective", "rude",
        "useless", "expensive", "overpriced", "cheap", "unhappy", "angry", "waste", "wrong",
        "missing", "problem", "issue", "faulty",
    ]
    .into_iter()
    .collect()
});

const NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "dont", "didn't", "didnt", "isn't", "isnt", "wasn't",
    "wasnt", "won't", "wont", "hardly", "nothing",
];

/// How many preceding tokens a negator reaches over.
const NEGATION_WINDOW: usize = 2;

/// Word-list classifier used when no model-backed collaborator is wired in.
#[derive(Debug, Default, Clone)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
            .map(|t| t.trim_matches('\'').to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    fn text_score(tokens: &[String]) -> i32 {
        let mut score = 0;
        for (i, token) in tokens.iter().enumerate() {
            let polarity = if POSITIVE_WORDS.contains(token.as_str()) {
                1
            } else if NEGATIVE_WORDS.contains(token.as_str()) {
                -1
            } else {
                0
            };
            if polarity == 0 {
                continue;
            }

            let negated = tokens[i.saturating_sub(NEGATION_WINDOW)..i]
                .iter()
                .any(|t| NEGATORS.contains(&t.as_str()));
            score += if negated { -polarity } else { polarity };
        }
        score
    }

    fn rating_score(rating: Option<i64>) -> i32 {
        match rating {
            Some(5) => 2,
            Some(4) => 1,
            Some(2) => -1,
            Some(1) => -2,
            _ => 0,
        }
    }

    pub fn normalize_rating(rating: Option<f64>) -> Option<i64> {
        rating
            .filter(|r| r.is_finite())
            .map(|r| (r.round() as i64).clamp(1, 5))
    }

    pub fn score(input: &FeedbackInput) -> SentimentResult {
        let tokens = Self::tokenize(&input.feedback);
        let rating = Self::normalize_rating(input.rating);
        let score = Self::text_score(&tokens) + Self::rating_score(rating);

        let sentiment = match score {
            s if s > 0 => Sentiment::Positive,
            s if s < 0 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        };

        let confidence = match sentiment {
            Sentiment::Neutral => 50,
            _ => (50 + 10 * score.unsigned_abs()).min(99) as u8,
        };

        let strong = score.abs() >= 2;
        let rating = rating.unwrap_or(match sentiment {
            Sentiment::Positive if strong => 5,
            Sentiment::Positive => 4,
            Sentiment::Negative if strong => 1,
            Sentiment::Negative => 2,
            Sentiment::Neutral => 3,
        });

        SentimentResult {
            sentiment,
            confidence,
            rating,
        }
    }
}

#[async_trait]
impl SentimentClassifier for LexiconClassifier {
    async fn classify(&self, input: &FeedbackInput) -> anyhow::Result<SentimentResult> {
        if input.feedback.trim().is_empty() {
            anyhow::bail!("feedback text is empty");
        }

        debug!(price = ?input.price, rating = ?input.rating, "Scoring feedback");
        Ok(Self::score(input))
    }
}
