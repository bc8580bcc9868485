//! First-run bootstrap
//!
//! Seeds a default ADMIN account when the user table is empty, so a fresh
//! install can log in and provision the rest. Existing installs are never
//! touched.

use rand::Rng;
use rand::distributions::Alphanumeric;
use shared::models::{Role, User};
use shared::util::new_id;
use sqlx::SqlitePool;

use crate::auth::hash_password;
use crate::db::repository::UserRepository;
use crate::utils::{AppError, AppResult};

const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Ensure at least one ADMIN account exists.
///
/// The password comes from `admin_password` (env `HR_ADMIN_PASSWORD`);
/// when unset a random one is generated and logged once at startup.
pub async fn ensure_admin_user(pool: &SqlitePool, admin_password: Option<&str>) -> AppResult<()> {
    let users = UserRepository::new(pool.clone());

    if users.count().await.map_err(AppError::from)? > 0 {
        return Ok(());
    }

    let (password, generated) = match admin_password {
        Some(p) => (p.to_string(), false),
        None => (random_password(), true),
    };

    let hash_pass = hash_password(&password)
        .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;

    let admin = User {
        id: new_id(),
        username: DEFAULT_ADMIN_USERNAME.to_string(),
        hash_pass,
        role: Role::Admin,
        employee_id: None,
    };
    users.insert(&admin).await.map_err(AppError::from)?;

    if generated {
        tracing::warn!(
            username = DEFAULT_ADMIN_USERNAME,
            password = %password,
            "No users found; seeded default admin with a generated password. \
             Set HR_ADMIN_PASSWORD to control it."
        );
    } else {
        tracing::info!(username = DEFAULT_ADMIN_USERNAME, "Seeded default admin user");
    }

    Ok(())
}

fn random_password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_password;
    use crate::db::DbService;

    #[tokio::test]
    async fn seeds_admin_only_into_an_empty_user_table() {
        let db = DbService::new_in_memory().await.unwrap();
        let users = UserRepository::new(db.pool.clone());

        ensure_admin_user(&db.pool, Some("bootstrap-pass")).await.unwrap();

        assert_eq!(users.count().await.unwrap(), 1);
        let admin = users.find_by_username("admin").await.unwrap().unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert!(admin.employee_id.is_none());
        assert!(verify_password("bootstrap-pass", &admin.hash_pass));

        // A second run must not touch an already-populated table
        ensure_admin_user(&db.pool, Some("other-pass")).await.unwrap();
        assert_eq!(users.count().await.unwrap(), 1);
        let admin = users.find_by_username("admin").await.unwrap().unwrap();
        assert!(verify_password("bootstrap-pass", &admin.hash_pass));
    }
}
