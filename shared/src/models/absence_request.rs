//! Absence Request Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EmployeeResponse;

/// Kind of absence being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AbsenceType {
    Vacation,
    SickLeave,
    Personal,
    Unpaid,
}

/// Lifecycle of an absence request: PENDING → APPROVED | REJECTED.
/// Resolved requests are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AbsenceStatus {
    Pending,
    Approved,
    Rejected,
}

/// Absence request entity (DB row)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AbsenceRequest {
    pub id: String,
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub absence_type: AbsenceType,
    pub reason: Option<String>,
    pub status: AbsenceStatus,
    pub approved_by_id: Option<String>,
    pub requested_at: i64,
    pub responded_at: Option<i64>,
    pub manager_comment: Option<String>,
}

/// Absence request view returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceRequestResponse {
    pub id: String,
    pub employee: EmployeeResponse,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub absence_type: AbsenceType,
    pub reason: Option<String>,
    pub status: AbsenceStatus,
    pub approved_by: Option<EmployeeResponse>,
    pub requested_at: i64,
    pub responded_at: Option<i64>,
    pub manager_comment: Option<String>,
}

/// Create absence request payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceCreate {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub absence_type: AbsenceType,
    pub reason: Option<String>,
}

/// Manager response to a pending absence request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceRespond {
    pub status: AbsenceStatus,
    pub manager_comment: Option<String>,
}
