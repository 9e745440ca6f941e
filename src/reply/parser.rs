//! Reader for the three-section reply format requested from the generative API.
//!
//! ```text
//! reply   := preamble? section*
//! section := marker body
//! marker  := "RESPONSE:" | "KEY_INSIGHTS:" | "KEYWORDS:"
//! ```
//!
//! A body runs until the next marker or the end of the text. Every section
//! is optional; when a marker repeats, its first occurrence wins.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Response,
    KeyInsights,
    Keywords,
}

impl Section {
    const ALL: [Section; 3] = [Section::Response, Section::KeyInsights, Section::Keywords];

    pub fn marker(self) -> &'static str {
        match self {
            Section::Response => "RESPONSE:",
            Section::KeyInsights => "KEY_INSIGHTS:",
            Section::Keywords => "KEYWORDS:",
        }
    }

    fn delimiter(self) -> Option<char> {
        match self {
            Section::Response => None,
            Section::KeyInsights => Some(';'),
            Section::Keywords => Some(','),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReply {
    /// `None` when the section is missing or blank.
    pub response: Option<String>,
    pub key_insights: Vec<String>,
    pub keywords: Vec<String>,
}

/// Splits `text` into `(section, body)` pairs in order of appearance.
fn scan(text: &str) -> Vec<(Section, &str)> {
    let mut marks: Vec<(usize, Section)> = Vec::new();
    let mut i = 0;
    while i < text.len() {
        let rest = &text[i..];
        match Section::ALL.iter().find(|s| rest.starts_with(s.marker())) {
            Some(section) => {
                marks.push((i, *section));
                i += section.marker().len();
            }
            None => i += rest.chars().next().map_or(1, char::len_utf8),
        }
    }

    marks
        .iter()
        .enumerate()
        .map(|(n, (start, section))| {
            let body_start = start + section.marker().len();
            let end = marks.get(n + 1).map_or(text.len(), |(next, _)| *next);
            (*section, &text[body_start..end])
        })
        .collect()
}

fn split_list(body: &str, delimiter: char) -> Vec<String> {
    body.split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_reply(text: &str) -> ParsedReply {
    let sections = scan(text);
    let first = |wanted: Section| {
        sections
            .iter()
            .find(|(section, _)| *section == wanted)
            .map(|(_, body)| *body)
    };

    let list = |section: Section| match (first(section), section.delimiter()) {
        (Some(body), Some(delimiter)) => split_list(body, delimiter),
        _ => Vec::new(),
    };

    ParsedReply {
        response: first(Section::Response)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        key_insights: list(Section::KeyInsights),
        keywords: list(Section::Keywords),
    }
}
