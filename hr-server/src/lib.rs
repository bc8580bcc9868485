//! HR Server - employee record-management backend
//!
//! # Architecture
//!
//! - **Auth** (`auth`): JWT + Argon2 authentication, role gates
//! - **Database** (`db`): SQLite store (sqlx) with embedded migrations
//! - **Services** (`services`): role-scoped visibility/mutation rules,
//!   absence workflow, feedback exchange, suggestion gateway
//! - **HTTP API** (`api`): RESTful routes and handlers
//!
//! # Module structure
//!
//! ```text
//! hr-server/src/
//! ├── core/       # configuration, state, server bootstrap
//! ├── auth/       # JWT, passwords, middleware
//! ├── db/         # pool, migrations, repositories, seeding
//! ├── services/   # business rules (explicit caller identity)
//! ├── api/        # HTTP routes and handlers
//! └── utils/      # errors, logging, sanitizer
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
