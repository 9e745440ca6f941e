//! Generative-language integration

pub mod gemini;

use async_trait::async_trait;

use crate::errors::FeedbackError;

pub use gemini::GeminiClient;

#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Sends one prompt and returns the raw model text.
    async fn generate(&self, prompt: &str) -> Result<String, FeedbackError>;
}
