//! Team API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use shared::models::{EmployeeResponse, TeamResponse, TeamUpsert};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::services::TeamService;
use crate::utils::AppResult;

/// Create a team
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TeamUpsert>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let service = TeamService::new(state.pool.clone());
    let created = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all teams
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<TeamResponse>>> {
    let service = TeamService::new(state.pool.clone());
    Ok(Json(service.list().await?))
}

/// Update a team (full-replacement semantics)
pub async fn update(
    State(state): State<ServerState>,
    Path(team_id): Path<String>,
    Json(payload): Json<TeamUpsert>,
) -> AppResult<Json<TeamResponse>> {
    payload.validate()?;
    let service = TeamService::new(state.pool.clone());
    Ok(Json(service.update(&team_id, payload).await?))
}

/// Everyone sharing a team with the caller
pub async fn my_team_members(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let service = TeamService::new(state.pool.clone());
    Ok(Json(service.my_team_members(&user).await?))
}

/// The caller's team
pub async fn my_team(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<TeamResponse>> {
    let service = TeamService::new(state.pool.clone());
    Ok(Json(service.my_team(&user).await?))
}
