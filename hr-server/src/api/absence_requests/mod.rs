//! Absence Request API Module

mod handler;

use axum::{Router, routing::get, routing::post, routing::put};

use crate::core::ServerState;

/// Absence request router. Authorization here is relationship-based
/// (requester's manager), enforced in the service rather than by role gate.
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/absence-requests", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/my-requests", get(handler::my_requests))
        .route("/team-requests", get(handler::team_requests))
        .route("/pending", get(handler::pending_requests))
        .route("/{request_id}/respond", put(handler::respond))
}
