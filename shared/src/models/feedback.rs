//! Feedback Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::EmployeeResponse;

/// Feedback entity (DB row) — a directed edge between two employees
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Feedback {
    pub id: String,
    pub from_employee_id: String,
    pub to_employee_id: String,
    pub feedback_text: String,
    pub created_at: i64,
}

/// Feedback view returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: String,
    pub from_employee: EmployeeResponse,
    pub to_employee: EmployeeResponse,
    pub feedback_text: String,
    pub timestamp: i64,
}

/// Create feedback payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackCreate {
    pub to_employee_id: String,
    #[validate(length(min = 10, max = 1000, message = "Feedback must be between 10 and 1000 characters"))]
    pub feedback_text: String,
}
