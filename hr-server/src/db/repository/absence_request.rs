//! Absence Request Repository

use shared::models::{AbsenceRequest, AbsenceStatus};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

#[derive(Clone)]
pub struct AbsenceRequestRepository {
    pool: SqlitePool,
}

impl AbsenceRequestRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find request by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<AbsenceRequest>> {
        let request: Option<AbsenceRequest> =
            sqlx::query_as("SELECT * FROM absence_requests WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(request)
    }

    /// All requests of one employee, most recent first
    pub async fn find_by_employee(&self, employee_id: &str) -> RepoResult<Vec<AbsenceRequest>> {
        let requests: Vec<AbsenceRequest> = sqlx::query_as(
            "SELECT * FROM absence_requests WHERE employee_id = ? ORDER BY requested_at DESC",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    /// All requests whose requester reports to the given manager,
    /// most recent first
    pub async fn find_by_manager(&self, manager_id: &str) -> RepoResult<Vec<AbsenceRequest>> {
        let requests: Vec<AbsenceRequest> = sqlx::query_as(
            r#"
            SELECT ar.* FROM absence_requests ar
            JOIN employees e ON e.id = ar.employee_id
            WHERE e.manager_id = ?
            ORDER BY ar.requested_at DESC
            "#,
        )
        .bind(manager_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    /// Insert a new request row
    pub async fn insert(&self, request: &AbsenceRequest) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO absence_requests (
                id, employee_id, start_date, end_date, absence_type,
                reason, status, approved_by_id, requested_at, responded_at,
                manager_comment
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.id)
        .bind(&request.employee_id)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(request.absence_type)
        .bind(&request.reason)
        .bind(request.status)
        .bind(&request.approved_by_id)
        .bind(request.requested_at)
        .bind(request.responded_at)
        .bind(&request.manager_comment)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Record the manager's resolution of a pending request
    pub async fn record_response(
        &self,
        id: &str,
        status: AbsenceStatus,
        approved_by_id: &str,
        responded_at: i64,
        manager_comment: Option<&str>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE absence_requests SET
                status = ?, approved_by_id = ?, responded_at = ?, manager_comment = ?
            WHERE id = ?
            "#,
        )
        .bind(status)
        .bind(approved_by_id)
        .bind(responded_at)
        .bind(manager_comment)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Absence request {} not found", id)));
        }
        Ok(())
    }
}
