//! Server state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::{DbService, seed};
use crate::services::SuggestionService;
use crate::utils::AppResult;

/// Shared application state — one cheap `Clone` per request
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
    /// External suggestion gateway
    pub suggestion: SuggestionService,
}

impl ServerState {
    /// Assemble state from pre-built parts (tests use this with an
    /// in-memory pool)
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let suggestion = SuggestionService::new(config.suggestion.clone());
        Self {
            config,
            pool,
            jwt_service,
            suggestion,
        }
    }

    /// Initialize the full state: open the database, run migrations,
    /// seed the first-run admin account.
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.db_path).await?;
        seed::ensure_admin_user(&db.pool, config.admin_password.as_deref()).await?;
        Ok(Self::new(config.clone(), db.pool))
    }
}
