//! Role Model

use serde::{Deserialize, Serialize};

/// Closed set of account roles.
///
/// Stored in the DB and carried in JWT claims as the upper-case tag
/// (`EMPLOYEE`, `MANAGER`, `HR`, `ADMIN`). All role-based branching goes
/// through the capability methods below rather than string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Role {
    Employee,
    Manager,
    Hr,
    Admin,
}

impl Role {
    /// Upper-case wire/database tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Manager => "MANAGER",
            Role::Hr => "HR",
            Role::Admin => "ADMIN",
        }
    }

    /// HR and ADMIN see every employee record unconditionally
    pub fn sees_all_employees(&self) -> bool {
        matches!(self, Role::Hr | Role::Admin)
    }

    /// Roles allowed to create/update/delete employee records and teams
    pub fn manages_employees(&self) -> bool {
        matches!(self, Role::Hr | Role::Admin | Role::Manager)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role tag
#[derive(Debug, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMPLOYEE" => Ok(Role::Employee),
            "MANAGER" => Ok(Role::Manager),
            "HR" => Ok(Role::Hr),
            "ADMIN" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_all_tags() {
        for role in [Role::Employee, Role::Manager, Role::Hr, Role::Admin] {
            assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
        }
        assert!(Role::from_str("SUPERUSER").is_err());
    }

    #[test]
    fn capability_mapping() {
        assert!(Role::Hr.sees_all_employees());
        assert!(Role::Admin.sees_all_employees());
        assert!(!Role::Manager.sees_all_employees());
        assert!(!Role::Employee.sees_all_employees());

        assert!(Role::Manager.manages_employees());
        assert!(!Role::Employee.manages_employees());
    }
}
