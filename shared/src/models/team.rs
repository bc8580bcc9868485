//! Team Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Team entity (DB row). Membership lives in the `team_members` join table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Team {
    pub id: String,
    pub name: String,
    pub manager_id: Option<String>,
}

/// Team view returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub manager_id: Option<String>,
    pub employee_ids: Vec<String>,
}

/// Create/update team payload
///
/// Used by both create and update. On update the full-replacement rules
/// apply: an absent manager clears the manager, an absent or empty member
/// list clears all members.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpsert {
    #[validate(length(min = 1, max = 100, message = "Team name is required"))]
    pub name: String,
    pub manager_id: Option<String>,
    pub employee_ids: Option<Vec<String>>,
}
