//! Employee Repository

use shared::models::{Employee, EmployeeResponse};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find all employees
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> =
            sqlx::query_as("SELECT * FROM employees ORDER BY last_name, first_name")
                .fetch_all(&self.pool)
                .await?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let employee: Option<Employee> = sqlx::query_as("SELECT * FROM employees WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    /// Find employee by email (unique)
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let employee: Option<Employee> = sqlx::query_as("SELECT * FROM employees WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    /// Direct reports of a manager (non-transitive)
    pub async fn find_direct_reports(&self, manager_id: &str) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = sqlx::query_as(
            "SELECT * FROM employees WHERE manager_id = ? ORDER BY last_name, first_name",
        )
        .bind(manager_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    /// Insert a new employee row
    pub async fn insert(&self, emp: &Employee) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO employees (
                id, first_name, last_name, email, position,
                department, hire_date, salary, manager_id
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&emp.id)
        .bind(&emp.first_name)
        .bind(&emp.last_name)
        .bind(&emp.email)
        .bind(&emp.position)
        .bind(&emp.department)
        .bind(emp.hire_date)
        .bind(emp.salary)
        .bind(&emp.manager_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Persist a full employee row (update by id)
    pub async fn update(&self, emp: &Employee) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE employees SET
                first_name = ?, last_name = ?, email = ?, position = ?,
                department = ?, hire_date = ?, salary = ?, manager_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&emp.first_name)
        .bind(&emp.last_name)
        .bind(&emp.email)
        .bind(&emp.position)
        .bind(&emp.department)
        .bind(emp.hire_date)
        .bind(emp.salary)
        .bind(&emp.manager_id)
        .bind(&emp.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Employee {} not found", emp.id)));
        }
        Ok(())
    }

    /// Hard delete an employee row. Returns whether a row existed.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Team ids the employee belongs to
    pub async fn team_ids(&self, employee_id: &str) -> RepoResult<Vec<String>> {
        let ids: Vec<(String,)> =
            sqlx::query_as("SELECT team_id FROM team_members WHERE employee_id = ?")
                .bind(employee_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(ids.into_iter().map(|(id,)| id).collect())
    }

    /// Build the client-facing view: resolves manager name and team ids
    pub async fn hydrate(&self, emp: Employee) -> RepoResult<EmployeeResponse> {
        let manager_name = match &emp.manager_id {
            Some(manager_id) => self.find_by_id(manager_id).await?.map(|m| m.full_name()),
            None => None,
        };
        let team_ids = self.team_ids(&emp.id).await?;

        Ok(EmployeeResponse {
            id: emp.id,
            first_name: emp.first_name,
            last_name: emp.last_name,
            email: emp.email,
            position: emp.position,
            department: emp.department,
            hire_date: emp.hire_date,
            salary: emp.salary,
            manager_id: emp.manager_id,
            manager_name,
            team_ids,
        })
    }

    /// Hydrate a whole listing
    pub async fn hydrate_all(&self, employees: Vec<Employee>) -> RepoResult<Vec<EmployeeResponse>> {
        let mut views = Vec::with_capacity(employees.len());
        for emp in employees {
            views.push(self.hydrate(emp).await?);
        }
        Ok(views)
    }
}
