//! Authentication and authorization
//!
//! - [`JwtService`] - JWT token service
//! - [`CurrentUser`] - authenticated caller context
//! - [`require_auth`] - authentication middleware
//! - [`require_role`] - role-gate middleware
//! - argon2 password hashing helpers

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_auth, require_role};
pub use password::{hash_password, verify_password};
