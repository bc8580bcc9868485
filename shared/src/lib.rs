//! Shared types for the HR backend
//!
//! Domain entities, request payloads and response views used by the server
//! (and by API clients). DB row types use
//! `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]` so the crate stays
//! database-free unless the `db` feature is enabled.

pub mod models;
pub mod util;

// Re-exports
pub use models::*;
pub use serde::{Deserialize, Serialize};
