//! Feedback API Module

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Feedback router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/feedback", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/received", get(handler::received))
        .route("/given", get(handler::given))
        .route("/suggest", get(handler::suggest))
}
