//! Health check route

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::core::ServerState;

/// Public liveness probe
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
