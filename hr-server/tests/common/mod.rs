//! Shared test fixtures: in-memory database plus directory seeding helpers

#![allow(dead_code)]

use chrono::NaiveDate;
use hr_server::auth::{CurrentUser, hash_password};
use hr_server::db::DbService;
use hr_server::db::repository::{EmployeeRepository, TeamRepository, UserRepository};
use shared::models::{Employee, Role, Team, User};
use shared::util::new_id;
use sqlx::SqlitePool;

pub async fn test_pool() -> SqlitePool {
    DbService::new_in_memory()
        .await
        .expect("in-memory database should open")
        .pool
}

/// Insert an employee with sensible defaults and return it
pub async fn seed_employee(
    pool: &SqlitePool,
    first_name: &str,
    last_name: &str,
    email: &str,
    manager_id: Option<&str>,
) -> Employee {
    let employee = Employee {
        id: new_id(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        position: "Software Engineer".to_string(),
        department: "Engineering".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2023, 5, 2).unwrap(),
        salary: 70_000.0,
        manager_id: manager_id.map(str::to_string),
    };
    EmployeeRepository::new(pool.clone())
        .insert(&employee)
        .await
        .expect("employee insert should succeed");
    employee
}

/// Insert a user account (optionally linked to an employee) and return the
/// caller context the services expect
pub async fn seed_user(
    pool: &SqlitePool,
    username: &str,
    role: Role,
    employee_id: Option<&str>,
) -> CurrentUser {
    let user = User {
        id: new_id(),
        username: username.to_string(),
        hash_pass: hash_password("password123").expect("hashing should succeed"),
        role,
        employee_id: employee_id.map(str::to_string),
    };
    UserRepository::new(pool.clone())
        .insert(&user)
        .await
        .expect("user insert should succeed");

    CurrentUser {
        id: user.id,
        username: user.username,
        role,
    }
}

/// Insert an empty team and return it
pub async fn seed_team(pool: &SqlitePool, name: &str, manager_id: Option<&str>) -> Team {
    let team = Team {
        id: new_id(),
        name: name.to_string(),
        manager_id: manager_id.map(str::to_string),
    };
    TeamRepository::new(pool.clone())
        .insert(&team)
        .await
        .expect("team insert should succeed");
    team
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
