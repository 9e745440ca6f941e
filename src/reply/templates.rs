use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::core::models::Sentiment;

pub const POSITIVE_REPLY: &str = "Thank you so much for your kind words! We're thrilled you had a \
great experience and can't wait to serve you again.";

pub const NEGATIVE_REPLY: &str = "We're sorry your experience didn't meet expectations. Thank you \
for letting us know. Our team will look into this and work to make it right.";

pub const NEUTRAL_REPLY: &str = "Thank you for your feedback! We appreciate you taking the time to \
share your thoughts and will use them to keep improving.";

static TEMPLATES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (Sentiment::Positive.label(), POSITIVE_REPLY),
        (Sentiment::Negative.label(), NEGATIVE_REPLY),
        (Sentiment::Neutral.label(), NEUTRAL_REPLY),
    ])
});

/// Static reply for a sentiment label; unknown labels get the neutral reply.
pub fn fallback_reply_for_label(label: &str) -> &'static str {
    TEMPLATES.get(label).copied().unwrap_or(NEUTRAL_REPLY)
}

pub fn fallback_reply(sentiment: Sentiment) -> &'static str {
    fallback_reply_for_label(sentiment.label())
}
