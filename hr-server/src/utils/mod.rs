//! Utility module - common helpers and types
//!
//! - [`AppError`] - application error type
//! - [`AppResult`] - application result alias
//! - logging setup and the markup sanitizer

pub mod error;
pub mod logger;
pub mod result;
pub mod sanitize;

pub use error::{AppError, ErrorBody};
pub use result::AppResult;
pub use sanitize::sanitize;
