use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Separator used for the skills column.
pub const SKILLS_DELIMITER: &str = ", ";

/// One analyzed upload as persisted in the `resumes` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredResume {
    pub id: i32,
    pub file_name: String,
    pub extracted_name: Option<String>,
    pub extracted_email: Option<String>,
    pub extracted_phone: Option<String>,
    /// Delimiter-joined skill list; NULL when no skill was found.
    pub extracted_skills: Option<String>,
    pub full_text: Option<String>,
    pub upload_date: DateTime<Utc>,
}

impl StoredResume {
    /// Re-splits the joined skills column.
    pub fn skills(&self) -> Vec<String> {
        split_skills(self.extracted_skills.as_deref())
    }
}

pub fn join_skills(skills: &[String]) -> Option<String> {
    if skills.is_empty() {
        None
    } else {
        Some(skills.join(SKILLS_DELIMITER))
    }
}

pub fn split_skills(joined: Option<&str>) -> Vec<String> {
    match joined {
        Some(s) if !s.is_empty() => s.split(SKILLS_DELIMITER).map(String::from).collect(),
        _ => Vec::new(),
    }
}
