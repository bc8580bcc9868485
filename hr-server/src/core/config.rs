use crate::auth::JwtConfig;
use crate::services::SuggestionConfig;

/// Server configuration
///
/// Every item can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 8080 | HTTP API port |
/// | DATABASE_PATH | hr.db | SQLite database file |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | HR_ADMIN_PASSWORD | (generated) | first-run admin password |
/// | JWT_SECRET / JWT_EXPIRATION_MINUTES / JWT_ISSUER / JWT_AUDIENCE | see auth | JWT settings |
/// | HUGGINGFACE_API_KEY / SUGGESTION_API_URL / SUGGESTION_MODEL | see services | suggestion gateway |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database path
    pub db_path: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Suggestion gateway configuration
    pub suggestion: SuggestionConfig,
    /// First-run admin password (generated when unset)
    pub admin_password: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "hr.db".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt: JwtConfig::default(),
            suggestion: SuggestionConfig::from_env(),
            admin_password: std::env::var("HR_ADMIN_PASSWORD").ok(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
