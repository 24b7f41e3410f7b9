use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{NewResume, ResumeStore, StoreError};
use crate::models::resume::{join_skills, StoredResume};

/// Vec-backed store for handler tests. `set_available(false)` makes every
/// operation fail the way a lost database connection would.
#[derive(Default)]
pub struct InMemoryResumeStore {
    rows: Mutex<Vec<StoredResume>>,
    unavailable: AtomicBool,
}

impl InMemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.check_available()
    }

    async fn insert(&self, resume: NewResume<'_>) -> Result<i32, StoreError> {
        self.check_available()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        rows.push(StoredResume {
            id,
            file_name: resume.file_name.to_string(),
            extracted_name: resume.record.name.clone(),
            extracted_email: resume.record.email.clone(),
            extracted_phone: resume.record.phone.clone(),
            extracted_skills: join_skills(&resume.record.skills),
            full_text: Some(resume.full_text.to_string()),
            upload_date: Utc::now(),
        });
        Ok(id)
    }

    async fn get(&self, id: i32) -> Result<Option<StoredResume>, StoreError> {
        self.check_available()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_resume_text;

    #[tokio::test]
    async fn test_round_trip_preserves_fields() {
        let store = InMemoryResumeStore::new();
        let full_text = "Jane Doe\njane@example.com\nAWS, Machine Learning\n";
        let record = parse_resume_text(full_text).unwrap();

        let id = store
            .insert(NewResume {
                file_name: "jane.docx",
                record: &record,
                full_text,
            })
            .await
            .unwrap();
        let stored = store.get(id).await.unwrap().unwrap();

        assert_eq!(stored.file_name, "jane.docx");
        assert_eq!(stored.extracted_name.as_deref(), Some("Jane Doe"));
        assert_eq!(stored.extracted_email.as_deref(), Some("jane@example.com"));
        assert_eq!(stored.full_text.as_deref(), Some(full_text));
        assert_eq!(stored.skills(), vec!["Machine Learning", "AWS"]);
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_rows_appended() {
        let store = InMemoryResumeStore::new();
        let record = parse_resume_text("x").unwrap();
        let first = store
            .insert(NewResume {
                file_name: "a.pdf",
                record: &record,
                full_text: "x",
            })
            .await
            .unwrap();
        let second = store
            .insert(NewResume {
                file_name: "a.pdf",
                record: &record,
                full_text: "x",
            })
            .await
            .unwrap();
        assert_eq!((first, second), (1, 2));
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_cleanly() {
        let store = InMemoryResumeStore::new();
        store.set_available(false);
        let record = parse_resume_text("x").unwrap();
        let result = store
            .insert(NewResume {
                file_name: "a.pdf",
                record: &record,
                full_text: "x",
            })
            .await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
        assert!(store.health_check().await.is_err());
        assert_eq!(store.len(), 0);
    }
}
