//! Data models
//!
//! Shared between hr-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are opaque UUID strings; timestamps are Unix millis (`i64`),
//! calendar dates are `chrono::NaiveDate` (stored as ISO-8601 TEXT).

pub mod absence_request;
pub mod employee;
pub mod feedback;
pub mod role;
pub mod team;
pub mod user;

// Re-exports
pub use absence_request::*;
pub use employee::*;
pub use feedback::*;
pub use role::*;
pub use team::*;
pub use user::*;
