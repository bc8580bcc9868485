//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee entity (DB row)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub hire_date: NaiveDate,
    pub salary: f64,
    pub manager_id: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Employee view returned to clients (manager name and team ids resolved)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub hire_date: NaiveDate,
    pub salary: f64,
    pub manager_id: Option<String>,
    pub manager_name: Option<String>,
    pub team_ids: Vec<String>,
}

/// Create employee payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[validate(length(min = 2, max = 100, message = "First name must be between 2 and 100 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 100, message = "Last name must be between 2 and 100 characters"))]
    pub last_name: String,
    #[validate(email(message = "Email must be valid"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "Position must not exceed 100 characters"))]
    pub position: String,
    #[validate(length(min = 1, max = 100, message = "Department must not exceed 100 characters"))]
    pub department: String,
    pub hire_date: NaiveDate,
    #[validate(range(exclusive_min = 0.0, message = "Salary must be greater than 0"))]
    pub salary: f64,
    pub manager_id: Option<String>,
    pub team_ids: Option<Vec<String>>,
}

/// Update employee payload
///
/// Name and email are always replaced; the optional fields are replaced only
/// when present. `team_ids` present (even empty) triggers a full membership
/// recompute.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[validate(length(min = 2, max = 100, message = "First name must be between 2 and 100 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 100, message = "Last name must be between 2 and 100 characters"))]
    pub last_name: String,
    #[validate(email(message = "Email must be valid"))]
    pub email: String,
    #[validate(length(max = 100, message = "Position must not exceed 100 characters"))]
    pub position: Option<String>,
    #[validate(length(max = 100, message = "Department must not exceed 100 characters"))]
    pub department: Option<String>,
    pub hire_date: Option<NaiveDate>,
    #[validate(range(exclusive_min = 0.0, message = "Salary must be greater than 0"))]
    pub salary: Option<f64>,
    pub manager_id: Option<String>,
    pub team_ids: Option<Vec<String>>,
}

/// Self-service profile update payload
///
/// Manager and salary are deliberately absent — they are not settable
/// through the profile path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OwnProfileUpdate {
    #[validate(length(min = 2, max = 100, message = "First name must be between 2 and 100 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 100, message = "Last name must be between 2 and 100 characters"))]
    pub last_name: String,
    #[validate(email(message = "Email must be valid"))]
    pub email: String,
    #[validate(length(max = 100, message = "Position must not exceed 100 characters"))]
    pub position: Option<String>,
    #[validate(length(max = 100, message = "Department must not exceed 100 characters"))]
    pub department: Option<String>,
    pub team_ids: Option<Vec<String>>,
}
