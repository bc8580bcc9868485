//! Employee API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post, routing::put};
use shared::models::Role;

use crate::auth::require_role;
use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    // Read and self-service routes: any authenticated caller; the service
    // layer applies the per-role visibility rules
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/me", get(handler::my_profile).put(handler::update_my_profile))
        .route("/{id}", get(handler::get_by_id));

    // Management routes: privileged roles only
    let manage_routes = Router::new()
        .route("/", post(handler::create))
        .route("/managers", get(handler::managers))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .layer(middleware::from_fn(require_role(&[
            Role::Hr,
            Role::Admin,
            Role::Manager,
        ])));

    read_routes.merge(manage_routes)
}
