//! Single-field heuristics. Each function scans the whole text independently.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

/// Loose on purpose: dates and reference numbers with the right digit
/// grouping are accepted as phone numbers too.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());

const MAX_NAME_CHARS: usize = 50;

/// First `local@domain.tld` occurrence in the text.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First phone-like digit sequence in the text.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// First line that looks like a person's name: non-empty once trimmed,
/// shorter than 50 characters, and free of digits, `@` and `http`.
pub fn extract_name(text: &str) -> Option<String> {
    text.split('\n')
        .map(str::trim)
        .find(|line| is_name_candidate(line))
        .map(String::from)
}

fn is_name_candidate(line: &str) -> bool {
    !line.is_empty()
        && line.chars().count() < MAX_NAME_CHARS
        && !DIGIT_RE.is_match(line)
        && !line.contains('@')
        && !line.contains("http")
}
