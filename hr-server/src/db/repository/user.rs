//! User Repository

use shared::models::User;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find user by username (unique)
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Find user linked to an employee
    pub async fn find_by_employee(&self, employee_id: &str) -> RepoResult<Option<User>> {
        let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE employee_id = ?")
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Insert a new user row
    pub async fn insert(&self, user: &User) -> RepoResult<()> {
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Username '{}' already exists",
                user.username
            )));
        }

        sqlx::query(
            "INSERT INTO users (id, username, hash_pass, role, employee_id) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.hash_pass)
        .bind(user.role)
        .bind(&user.employee_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete the user linked to an employee (employee deletion cascade).
    /// Returns whether a row existed.
    pub async fn delete_by_employee(&self, employee_id: &str) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of user accounts
    pub async fn count(&self) -> RepoResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
