//! Team service
//!
//! Team CRUD plus the caller-centric "my team" views. Update uses
//! full-replacement semantics: an absent manager clears the manager, an
//! absent or empty member list clears all members. Create is stricter than
//! employee-create about member ids: every id must resolve.

use shared::models::{EmployeeResponse, Team, TeamResponse, TeamUpsert};
use shared::util::new_id;
use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::db::repository::{EmployeeRepository, TeamRepository, UserRepository};
use crate::utils::{AppError, AppResult};

use super::require_caller_employee;

pub struct TeamService {
    teams: TeamRepository,
    employees: EmployeeRepository,
    users: UserRepository,
}

impl TeamService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            teams: TeamRepository::new(pool.clone()),
            employees: EmployeeRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// Create a team. The manager, when given, must resolve; so must every
    /// member id.
    pub async fn create(&self, payload: TeamUpsert) -> AppResult<TeamResponse> {
        let manager_id = self.resolve_manager(payload.manager_id.as_deref()).await?;

        let team = Team {
            id: new_id(),
            name: payload.name,
            manager_id,
        };
        self.teams.insert(&team).await?;

        let member_ids = match payload.employee_ids {
            Some(ids) if !ids.is_empty() => {
                let ids = self.resolve_members(&ids).await?;
                self.teams.replace_members(&team.id, &ids).await?;
                ids
            }
            _ => vec![],
        };

        Ok(TeamResponse {
            id: team.id,
            name: team.name,
            manager_id: team.manager_id,
            employee_ids: member_ids,
        })
    }

    /// List every team with its member ids
    pub async fn list(&self) -> AppResult<Vec<TeamResponse>> {
        let teams = self.teams.find_all().await?;
        let mut views = Vec::with_capacity(teams.len());
        for team in teams {
            views.push(self.hydrate(team).await?);
        }
        Ok(views)
    }

    /// Update a team with full-replacement semantics
    pub async fn update(&self, team_id: &str, payload: TeamUpsert) -> AppResult<TeamResponse> {
        let mut team = self
            .teams
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::not_found("Team not found"))?;

        team.name = payload.name;
        team.manager_id = self.resolve_manager(payload.manager_id.as_deref()).await?;
        self.teams.update(&team).await?;

        let member_ids = match payload.employee_ids {
            Some(ids) => self.resolve_members(&ids).await?,
            None => vec![],
        };
        self.teams.replace_members(&team.id, &member_ids).await?;

        Ok(TeamResponse {
            id: team.id,
            name: team.name,
            manager_id: team.manager_id,
            employee_ids: member_ids,
        })
    }

    /// Everyone the caller shares a team with: members of every team
    /// containing the caller plus each team's manager, deduplicated,
    /// without the caller themself.
    pub async fn my_team_members(&self, caller: &CurrentUser) -> AppResult<Vec<EmployeeResponse>> {
        let me = require_caller_employee(&self.users, &self.employees, caller).await?;

        let mut seen = Vec::new();
        for team in self.teams.teams_containing(&me.id).await? {
            for member_id in self.teams.member_ids(&team.id).await? {
                if member_id != me.id && !seen.contains(&member_id) {
                    seen.push(member_id);
                }
            }
            if let Some(manager_id) = team.manager_id
                && manager_id != me.id
                && !seen.contains(&manager_id)
            {
                seen.push(manager_id);
            }
        }

        let mut views = Vec::with_capacity(seen.len());
        for id in seen {
            if let Some(employee) = self.employees.find_by_id(&id).await? {
                views.push(self.employees.hydrate(employee).await?);
            }
        }
        Ok(views)
    }

    /// The first team containing the caller
    pub async fn my_team(&self, caller: &CurrentUser) -> AppResult<TeamResponse> {
        let me = require_caller_employee(&self.users, &self.employees, caller).await?;

        let team = self
            .teams
            .teams_containing(&me.id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found("No team found for current employee"))?;

        self.hydrate(team).await
    }

    async fn hydrate(&self, team: Team) -> AppResult<TeamResponse> {
        let employee_ids = self.teams.member_ids(&team.id).await?;
        Ok(TeamResponse {
            id: team.id,
            name: team.name,
            manager_id: team.manager_id,
            employee_ids,
        })
    }

    /// Absent manager id means "no manager"; a present one must resolve
    async fn resolve_manager(&self, manager_id: Option<&str>) -> AppResult<Option<String>> {
        match manager_id {
            Some(id) => {
                let manager = self
                    .employees
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Manager not found"))?;
                Ok(Some(manager.id))
            }
            None => Ok(None),
        }
    }

    /// Every member id must resolve to an existing employee
    async fn resolve_members(&self, ids: &[String]) -> AppResult<Vec<String>> {
        let mut resolved = Vec::with_capacity(ids.len());
        for id in ids {
            let employee = self
                .employees
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Employee not found: {}", id)))?;
            if !resolved.contains(&employee.id) {
                resolved.push(employee.id);
            }
        }
        Ok(resolved)
    }
}
