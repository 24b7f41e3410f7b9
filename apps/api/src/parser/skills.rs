//! Skill vocabulary and keyword matcher.

/// Recognized skills in their canonical spelling. Matching is a
/// case-insensitive substring test against the whole document, so short
/// entries also fire inside longer words ("Java" inside "JavaScript").
pub const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "JavaScript",
    "Java",
    "C++",
    "SQL",
    "PostgreSQL",
    "FastAPI",
    "Flask",
    "React",
    "Docker",
    "Git",
    "NLP",
    "Machine Learning",
    "Data Analysis",
    "API",
    "Web Scraping",
    "Automation",
    "AWS",
    "Azure",
    "GCP",
    "Agile",
    "Jira",
    "Trello",
    "Postman",
];

/// Returns every vocabulary entry contained in `text`, in vocabulary order.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();
    for skill in SKILL_VOCABULARY {
        if text_lower.contains(&skill.to_lowercase()) && !found.iter().any(|s| s == skill) {
            found.push((*skill).to_string());
        }
    }
    found
}
