//! Resume text parser: turns extracted document text into a `ParsedRecord`.
//!
//! Every field is derived by an independent pass over the same text and
//! degrades to absent/empty when nothing matches. The only error is being
//! handed no text at all.

pub mod fields;
pub mod skills;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use fields::{extract_email, extract_name, extract_phone};
pub use skills::extract_skills;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no text to parse")]
    EmptyText,
}

/// Structured fields recovered from one resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Canonical skill spellings in vocabulary order.
    pub skills: Vec<String>,
}

/// Parses resume text into a `ParsedRecord`.
pub fn parse_resume_text(text: &str) -> Result<ParsedRecord, ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyText);
    }

    Ok(ParsedRecord {
        email: extract_email(text),
        phone: extract_phone(text),
        name: extract_name(text),
        skills: extract_skills(text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_resume() {
        let text = "John Smith\njohn@example.com\n555-123-4567\nSkills: Python, Docker, SQL";
        let record = parse_resume_text(text).unwrap();
        assert_eq!(record.name.as_deref(), Some("John Smith"));
        assert_eq!(record.email.as_deref(), Some("john@example.com"));
        assert_eq!(record.phone.as_deref(), Some("555-123-4567"));
        assert_eq!(record.skills, vec!["Python", "SQL", "Docker"]);
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert_eq!(parse_resume_text(""), Err(ParseError::EmptyText));
    }

    #[test]
    fn test_garbled_text_yields_all_absent_record() {
        let record = parse_resume_text("%%%% 12 ####\n\n0000").unwrap();
        assert_eq!(record, ParsedRecord::default());
    }

    #[test]
    fn test_whitespace_only_text_is_valid_but_empty() {
        let record = parse_resume_text("\n\n").unwrap();
        assert_eq!(record, ParsedRecord::default());
    }

    #[test]
    fn test_name_unaffected_by_later_noise() {
        let text = "Jane Doe\nSenior Engineer 2019-2024\njane.doe@example.com\nhttp://jane.dev";
        let record = parse_resume_text(text).unwrap();
        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.email.as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_record_serializes_absent_fields_as_null() {
        let json = serde_json::to_value(ParsedRecord::default()).unwrap();
        assert!(json["name"].is_null());
        assert!(json["email"].is_null());
        assert!(json["phone"].is_null());
        assert_eq!(json["skills"], serde_json::json!([]));
    }
}
