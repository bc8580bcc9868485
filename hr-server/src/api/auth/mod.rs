//! Authentication Routes

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

mod handler;

/// Build authentication router
/// - /api/auth/login: public (skipped by the auth middleware)
/// - /api/auth/me: protected
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/me", get(handler::me))
}
