//! Repository Module
//!
//! CRUD operations over the SQLite store. One repository per aggregate;
//! services compose them and own the business rules.

pub mod absence_request;
pub mod employee;
pub mod feedback;
pub mod team;
pub mod user;

// Re-exports
pub use absence_request::AbsenceRequestRepository;
pub use employee::EmployeeRepository;
pub use feedback::FeedbackRepository;
pub use team::TeamRepository;
pub use user::UserRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
