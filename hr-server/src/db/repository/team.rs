//! Team Repository
//!
//! Teams plus the `team_members` join table. Membership writes are
//! idempotent (`INSERT OR IGNORE`); full replacement is delete-then-insert.

use shared::models::Team;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

#[derive(Clone)]
pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find all teams
    pub async fn find_all(&self) -> RepoResult<Vec<Team>> {
        let teams: Vec<Team> = sqlx::query_as("SELECT * FROM teams ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(teams)
    }

    /// Find team by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Team>> {
        let team: Option<Team> = sqlx::query_as("SELECT * FROM teams WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(team)
    }

    /// Insert a new team row
    pub async fn insert(&self, team: &Team) -> RepoResult<()> {
        sqlx::query("INSERT INTO teams (id, name, manager_id) VALUES (?, ?, ?)")
            .bind(&team.id)
            .bind(&team.name)
            .bind(&team.manager_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Update name and manager of an existing team
    pub async fn update(&self, team: &Team) -> RepoResult<()> {
        let result = sqlx::query("UPDATE teams SET name = ?, manager_id = ? WHERE id = ?")
            .bind(&team.name)
            .bind(&team.manager_id)
            .bind(&team.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Team {} not found", team.id)));
        }
        Ok(())
    }

    /// Member employee ids of a team
    pub async fn member_ids(&self, team_id: &str) -> RepoResult<Vec<String>> {
        let ids: Vec<(String,)> =
            sqlx::query_as("SELECT employee_id FROM team_members WHERE team_id = ?")
                .bind(team_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(ids.into_iter().map(|(id,)| id).collect())
    }

    /// Add a member (no-op when already present)
    pub async fn add_member(&self, team_id: &str, employee_id: &str) -> RepoResult<()> {
        sqlx::query("INSERT OR IGNORE INTO team_members (team_id, employee_id) VALUES (?, ?)")
            .bind(team_id)
            .bind(employee_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Replace the member set of a team
    pub async fn replace_members(&self, team_id: &str, employee_ids: &[String]) -> RepoResult<()> {
        sqlx::query("DELETE FROM team_members WHERE team_id = ?")
            .bind(team_id)
            .execute(&self.pool)
            .await?;
        for employee_id in employee_ids {
            self.add_member(team_id, employee_id).await?;
        }
        Ok(())
    }

    /// Remove an employee from every team
    pub async fn remove_member_everywhere(&self, employee_id: &str) -> RepoResult<()> {
        sqlx::query("DELETE FROM team_members WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Teams the employee is a member of
    pub async fn teams_containing(&self, employee_id: &str) -> RepoResult<Vec<Team>> {
        let teams: Vec<Team> = sqlx::query_as(
            r#"
            SELECT t.* FROM teams t
            JOIN team_members tm ON tm.team_id = t.id
            WHERE tm.employee_id = ?
            ORDER BY t.name
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(teams)
    }
}
