use feedback_reply::core::models::{Sentiment, SentimentResult};
use feedback_reply::reply::parser::{ParsedReply, parse_reply};
use feedback_reply::reply::{generated_reply, templates};

#[test]
fn test_parse_all_sections_on_one_line() {
    let parsed = parse_reply(
        "RESPONSE: Thanks! KEY_INSIGHTS: loved packaging; fast delivery KEYWORDS: packaging, delivery",
    );

    assert_eq!(parsed.response.as_deref(), Some("Thanks!"));
    assert_eq!(parsed.key_insights, vec!["loved packaging", "fast delivery"]);
    assert_eq!(parsed.keywords, vec!["packaging", "delivery"]);
}

#[test]
fn test_parse_multiline_reply_with_preamble() {
    let text = "Sure, here you go.\n\
                RESPONSE: We're sorry about the delay.\nWe'll make it right.\n\
                KEY_INSIGHTS: late shipment;; ; support was slow;\n\
                KEYWORDS: shipping, , support,\n";

    let parsed = parse_reply(text);
    assert_eq!(
        parsed.response.as_deref(),
        Some("We're sorry about the delay.\nWe'll make it right.")
    );
    assert_eq!(parsed.key_insights, vec!["late shipment", "support was slow"]);
    assert_eq!(parsed.keywords, vec!["shipping", "support"]);
}

#[test]
fn test_missing_key_insights_section() {
    let parsed = parse_reply("RESPONSE: Glad you liked it! KEYWORDS: fit, colour");

    assert_eq!(parsed.response.as_deref(), Some("Glad you liked it!"));
    assert!(parsed.key_insights.is_empty());
    assert_eq!(parsed.keywords, vec!["fit", "colour"]);
}

#[test]
fn test_sections_in_any_order() {
    let parsed = parse_reply("KEYWORDS: a, b KEY_INSIGHTS: x RESPONSE: Hello");

    assert_eq!(parsed.response.as_deref(), Some("Hello"));
    assert_eq!(parsed.key_insights, vec!["x"]);
    assert_eq!(parsed.keywords, vec!["a", "b"]);
}

#[test]
fn test_first_occurrence_wins() {
    let parsed = parse_reply("RESPONSE: first RESPONSE: second");
    assert_eq!(parsed.response.as_deref(), Some("first"));
}

#[test]
fn test_unstructured_text_yields_empty_reply() {
    assert_eq!(
        parse_reply("I am a model and I ignored your format."),
        ParsedReply::default()
    );
    assert_eq!(parse_reply(""), ParsedReply::default());
}

#[test]
fn test_blank_response_section_is_absent() {
    let parsed = parse_reply("RESPONSE:    KEYWORDS: one");
    assert!(parsed.response.is_none());
    assert_eq!(parsed.keywords, vec!["one"]);
}

#[test]
fn test_non_ascii_text_around_markers() {
    let parsed = parse_reply("Voilà — RESPONSE: Merci beaucoup ✨ KEYWORDS: café, thé");
    assert_eq!(parsed.response.as_deref(), Some("Merci beaucoup ✨"));
    assert_eq!(parsed.keywords, vec!["café", "thé"]);
}

#[test]
fn test_generated_reply_falls_back_to_template_without_response() {
    let result = SentimentResult {
        sentiment: Sentiment::Negative,
        confidence: 80,
        rating: 1,
    };

    let reply = generated_reply(&result, parse_reply("KEY_INSIGHTS: broken zip"));
    assert_eq!(reply.customer_response, templates::NEGATIVE_REPLY);
    assert_eq!(reply.key_insights, vec!["broken zip"]);
    assert!(reply.keywords.is_empty());
}
