//! Employee service — role-scoped visibility and mutation
//!
//! Decides, per (caller role, caller employee), which employee records are
//! visible and which are mutable, and enforces those rules uniformly.
//!
//! Read path and write path fail differently on purpose: a get the caller
//! may not see reports "not found" (an outsider cannot probe which ids
//! exist), while a mutation the caller may not perform reports a distinct
//! authorization failure.

use shared::models::{
    Employee, EmployeeCreate, EmployeeResponse, EmployeeUpdate, OwnProfileUpdate, Role,
};
use shared::util::new_id;
use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::db::repository::{EmployeeRepository, TeamRepository, UserRepository};
use crate::utils::{AppError, AppResult};

use super::{caller_employee, require_caller_employee};

const DUPLICATE_EMAIL: &str = "Email address is already in use";
const NO_UPDATE_PERMISSION: &str = "You do not have permission to update employee records";

// Depth guard for manager-chain walks; real chains are a handful of levels
const MAX_MANAGER_CHAIN: usize = 128;

pub struct EmployeeService {
    employees: EmployeeRepository,
    users: UserRepository,
    teams: TeamRepository,
}

impl EmployeeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            employees: EmployeeRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            teams: TeamRepository::new(pool),
        }
    }

    /// List employees visible to the caller.
    ///
    /// HR/ADMIN see everyone; a MANAGER sees direct reports only
    /// (non-transitive); everyone else gets an empty listing.
    pub async fn list(&self, caller: &CurrentUser) -> AppResult<Vec<EmployeeResponse>> {
        if caller.role.sees_all_employees() {
            let all = self.employees.find_all().await?;
            return Ok(self.employees.hydrate_all(all).await?);
        }

        if caller.role == Role::Manager {
            let Some(me) = caller_employee(&self.users, &self.employees, caller).await? else {
                return Ok(vec![]);
            };
            let reports = self.employees.find_direct_reports(&me.id).await?;
            return Ok(self.employees.hydrate_all(reports).await?);
        }

        Ok(vec![])
    }

    /// Get one employee by id, subject to visibility rules.
    ///
    /// A record the caller may not see is indistinguishable from an absent
    /// one: both are NotFound.
    pub async fn get(&self, caller: &CurrentUser, id: &str) -> AppResult<EmployeeResponse> {
        let not_found = || AppError::not_found(format!("Employee {} not found", id));

        let Some(employee) = self.employees.find_by_id(id).await? else {
            return Err(not_found());
        };

        if caller.role.sees_all_employees() {
            return Ok(self.employees.hydrate(employee).await?);
        }

        let Some(me) = caller_employee(&self.users, &self.employees, caller).await? else {
            return Err(not_found());
        };

        let visible = match caller.role {
            Role::Manager => {
                employee.id == me.id || employee.manager_id.as_deref() == Some(me.id.as_str())
            }
            Role::Employee => employee.id == me.id,
            _ => false,
        };

        if visible {
            Ok(self.employees.hydrate(employee).await?)
        } else {
            Err(not_found())
        }
    }

    /// Create an employee.
    ///
    /// A MANAGER caller becomes the new employee's manager regardless of the
    /// request's `managerId`; otherwise the requested manager is used when it
    /// resolves. Team ids that do not resolve are silently skipped.
    pub async fn create(
        &self,
        caller: &CurrentUser,
        payload: EmployeeCreate,
    ) -> AppResult<EmployeeResponse> {
        if !caller.role.manages_employees() {
            return Err(AppError::forbidden(
                "You do not have permission to create employee records",
            ));
        }

        if self.employees.find_by_email(&payload.email).await?.is_some() {
            return Err(AppError::conflict(DUPLICATE_EMAIL));
        }

        let manager_id = if caller.role == Role::Manager {
            caller_employee(&self.users, &self.employees, caller)
                .await?
                .map(|me| me.id)
        } else {
            match payload.manager_id {
                Some(ref id) => self.employees.find_by_id(id).await?.map(|m| m.id),
                None => None,
            }
        };

        let employee = Employee {
            id: new_id(),
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            position: payload.position,
            department: payload.department,
            hire_date: payload.hire_date,
            salary: payload.salary,
            manager_id,
        };
        self.employees.insert(&employee).await?;

        if let Some(team_ids) = payload.team_ids {
            self.apply_team_membership(&employee.id, &team_ids).await?;
        }

        Ok(self.employees.hydrate(employee).await?)
    }

    /// Update an employee record.
    ///
    /// HR/ADMIN may update anyone. A MANAGER may update a direct report that
    /// is not themself — violations are authorization failures, distinct
    /// from NotFound. Name and email are always replaced; other fields only
    /// when present; a present `teamIds` (even empty) recomputes membership.
    pub async fn update(
        &self,
        caller: &CurrentUser,
        id: &str,
        payload: EmployeeUpdate,
    ) -> AppResult<EmployeeResponse> {
        match caller.role {
            Role::Hr | Role::Admin => {}
            Role::Manager => {
                let me = caller_employee(&self.users, &self.employees, caller)
                    .await?
                    .ok_or_else(|| AppError::forbidden(NO_UPDATE_PERMISSION))?;

                let target = self
                    .employees
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;

                if target.id == me.id {
                    return Err(AppError::forbidden("Managers cannot edit their own data"));
                }
                if target.manager_id.as_deref() != Some(me.id.as_str()) {
                    return Err(AppError::forbidden("You can only edit your direct reports"));
                }
            }
            _ => return Err(AppError::forbidden(NO_UPDATE_PERMISSION)),
        }

        let mut employee = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;

        if employee.email != payload.email
            && self.employees.find_by_email(&payload.email).await?.is_some()
        {
            return Err(AppError::conflict(DUPLICATE_EMAIL));
        }

        employee.first_name = payload.first_name;
        employee.last_name = payload.last_name;
        employee.email = payload.email;

        if let Some(position) = payload.position {
            employee.position = position;
        }
        if let Some(department) = payload.department {
            employee.department = department;
        }
        if let Some(hire_date) = payload.hire_date {
            employee.hire_date = hire_date;
        }
        if let Some(salary) = payload.salary {
            employee.salary = salary;
        }

        // An unresolvable manager id leaves the current manager untouched
        if let Some(ref manager_id) = payload.manager_id
            && let Some(manager) = self.employees.find_by_id(manager_id).await?
        {
            self.assert_no_cycle(&employee.id, &manager.id).await?;
            employee.manager_id = Some(manager.id);
        }

        self.employees.update(&employee).await?;

        if let Some(team_ids) = payload.team_ids {
            self.apply_team_membership(&employee.id, &team_ids).await?;
        }

        Ok(self.employees.hydrate(employee).await?)
    }

    /// Update the caller's own profile.
    ///
    /// Manager and salary are not reachable through this path.
    pub async fn update_own_profile(
        &self,
        caller: &CurrentUser,
        payload: OwnProfileUpdate,
    ) -> AppResult<EmployeeResponse> {
        let mut employee = require_caller_employee(&self.users, &self.employees, caller).await?;

        if employee.email != payload.email
            && self.employees.find_by_email(&payload.email).await?.is_some()
        {
            return Err(AppError::conflict(DUPLICATE_EMAIL));
        }

        employee.first_name = payload.first_name;
        employee.last_name = payload.last_name;
        employee.email = payload.email;

        if let Some(position) = payload.position {
            employee.position = position;
        }
        if let Some(department) = payload.department {
            employee.department = department;
        }

        self.employees.update(&employee).await?;

        if let Some(team_ids) = payload.team_ids {
            self.apply_team_membership(&employee.id, &team_ids).await?;
        }

        Ok(self.employees.hydrate(employee).await?)
    }

    /// Get the caller's own profile
    pub async fn my_profile(&self, caller: &CurrentUser) -> AppResult<EmployeeResponse> {
        let employee = require_caller_employee(&self.users, &self.employees, caller).await?;
        Ok(self.employees.hydrate(employee).await?)
    }

    /// Delete an employee: removed from every team, the linked user account
    /// is dropped, then the record itself. Returns whether a record existed.
    /// (Role gating happens at the route layer.)
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        if self.employees.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        self.teams.remove_member_everywhere(id).await?;
        self.users.delete_by_employee(id).await?;
        self.employees.delete(id).await?;
        Ok(true)
    }

    /// Full-replacement team membership: drop every current membership, then
    /// join each team id that resolves (unresolvable ids are skipped).
    async fn apply_team_membership(&self, employee_id: &str, team_ids: &[String]) -> AppResult<()> {
        self.teams.remove_member_everywhere(employee_id).await?;
        for team_id in team_ids {
            if self.teams.find_by_id(team_id).await?.is_some() {
                self.teams.add_member(team_id, employee_id).await?;
            }
        }
        Ok(())
    }

    /// Reject a manager assignment that would close a reporting cycle.
    ///
    /// Walks the manager chain upward from the proposed manager; finding the
    /// employee on the way up means the assignment loops.
    async fn assert_no_cycle(&self, employee_id: &str, new_manager_id: &str) -> AppResult<()> {
        let mut cursor = Some(new_manager_id.to_string());
        let mut hops = 0;

        while let Some(current) = cursor {
            if current == employee_id {
                return Err(AppError::validation(
                    "Manager assignment would create a reporting cycle",
                ));
            }
            hops += 1;
            if hops > MAX_MANAGER_CHAIN {
                return Err(AppError::validation("Manager chain is too deep"));
            }
            cursor = self
                .employees
                .find_by_id(&current)
                .await?
                .and_then(|e| e.manager_id);
        }

        Ok(())
    }
}
