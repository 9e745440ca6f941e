use crate::core::models::{FeedbackInput, Sentiment};

/// Max characters of customer feedback embedded in the generation prompt
pub const MAX_FEEDBACK_LEN: usize = 4000;

/// Strip control characters (keeping line breaks and tabs) and hard-truncate
/// feedback before it is embedded in a prompt.
pub fn sanitize_feedback(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
        .take(MAX_FEEDBACK_LEN)
        .collect()
}

/// Builds the single prompt sent to the generative API.
///
/// The model is asked to answer in three labelled sections so the reply can
/// be read back by [`crate::reply::parser::parse_reply`].
pub fn build_reply_prompt(sentiment: Sentiment, input: &FeedbackInput) -> String {
    let mut context = String::new();
    if let Some(rating) = input.rating.filter(|r| r.is_finite()) {
        context.push_str(&format!("Customer rating: {rating}/5\n"));
    }
    if let Some(price) = input.price.filter(|p| p.is_finite()) {
        context.push_str(&format!("Price paid: {price:.2}\n"));
    }

    format!(
        "You are a customer support assistant replying to product feedback.\n\
         The feedback was classified as {sentiment}.\n\
         {context}\
         Customer feedback:\n\"\"\"\n{feedback}\n\"\"\"\n\n\
         Reply in exactly this format and nothing else:\n\
         RESPONSE: <a short, friendly reply addressed to the customer>\n\
         KEY_INSIGHTS: <insights separated by semicolons>\n\
         KEYWORDS: <keywords separated by commas>",
        sentiment = sentiment.label(),
        context = context,
        feedback = sanitize_feedback(&input.feedback),
    )
}
