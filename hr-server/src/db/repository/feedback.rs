//! Feedback Repository

use shared::models::Feedback;
use sqlx::SqlitePool;

use super::RepoResult;

#[derive(Clone)]
pub struct FeedbackRepository {
    pool: SqlitePool,
}

impl FeedbackRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new feedback row
    pub async fn insert(&self, feedback: &Feedback) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO feedback (id, from_employee_id, to_employee_id, feedback_text, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&feedback.id)
        .bind(&feedback.from_employee_id)
        .bind(&feedback.to_employee_id)
        .bind(&feedback.feedback_text)
        .bind(feedback.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Feedback addressed to an employee
    pub async fn find_received(&self, employee_id: &str) -> RepoResult<Vec<Feedback>> {
        let feedback: Vec<Feedback> =
            sqlx::query_as("SELECT * FROM feedback WHERE to_employee_id = ?")
                .bind(employee_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(feedback)
    }

    /// Feedback written by an employee
    pub async fn find_given(&self, employee_id: &str) -> RepoResult<Vec<Feedback>> {
        let feedback: Vec<Feedback> =
            sqlx::query_as("SELECT * FROM feedback WHERE from_employee_id = ?")
                .bind(employee_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(feedback)
    }
}
