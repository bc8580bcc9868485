//! Team API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post, routing::put};
use shared::models::Role;

use crate::auth::require_role;
use crate::core::ServerState;

/// Team router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/teams", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/my-team/members", get(handler::my_team_members))
        .route("/my-team/details", get(handler::my_team));

    let manage_routes = Router::new()
        .route("/", post(handler::create))
        .route("/{team_id}", put(handler::update))
        .layer(middleware::from_fn(require_role(&[
            Role::Hr,
            Role::Admin,
            Role::Manager,
        ])));

    read_routes.merge(manage_routes)
}
