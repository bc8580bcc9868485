//! User Model
//!
//! Authentication identity. A user may exist without a linked employee
//! (administrative accounts); employee-scoped operations require the link.

use serde::{Deserialize, Serialize};

use super::Role;

/// User entity (DB row)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub role: Role,
    pub employee_id: Option<String>,
}

/// Login request payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response with JWT token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub username: String,
    pub role: Role,
}
