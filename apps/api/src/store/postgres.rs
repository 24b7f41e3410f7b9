use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use super::{NewResume, ResumeStore, StoreError};
use crate::models::resume::{join_skills, StoredResume};

const CREATE_RESUMES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS resumes (
        id SERIAL PRIMARY KEY,
        file_name VARCHAR(255) NOT NULL,
        extracted_name VARCHAR(255),
        extracted_email VARCHAR(255),
        extracted_phone VARCHAR(50),
        extracted_skills TEXT,
        full_text TEXT,
        upload_date TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// PostgreSQL-backed store. Each operation checks a connection out of the
/// pool and returns it when done.
#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Pool exhaustion and timeouts mean the database is unreachable rather than
/// that a statement failed.
fn classify(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            StoreError::Unavailable(e.to_string())
        }
        other => StoreError::Database(other),
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_RESUMES_TABLE)
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        info!("Table 'resumes' ensured to exist");
        Ok(())
    }

    async fn insert(&self, resume: NewResume<'_>) -> Result<i32, StoreError> {
        let NewResume {
            file_name,
            record,
            full_text,
        } = resume;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO resumes
                (file_name, extracted_name, extracted_email, extracted_phone,
                 extracted_skills, full_text)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(file_name)
        .bind(record.name.as_deref())
        .bind(record.email.as_deref())
        .bind(record.phone.as_deref())
        .bind(join_skills(&record.skills))
        .bind(full_text)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        info!("Stored resume {id} for '{file_name}'");
        Ok(id)
    }

    async fn get(&self, id: i32) -> Result<Option<StoredResume>, StoreError> {
        sqlx::query_as::<_, StoredResume>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        Ok(())
    }
}
