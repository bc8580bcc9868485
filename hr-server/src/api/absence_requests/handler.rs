//! Absence Request API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use shared::models::{AbsenceCreate, AbsenceRequestResponse, AbsenceRespond};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::services::AbsenceService;
use crate::utils::AppResult;

/// File a new absence request for the caller
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<AbsenceCreate>,
) -> AppResult<impl IntoResponse> {
    let service = AbsenceService::new(state.pool.clone());
    let created = service.create(&user, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// The caller's own requests, most recent first
pub async fn my_requests(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<AbsenceRequestResponse>>> {
    let service = AbsenceService::new(state.pool.clone());
    Ok(Json(service.my_requests(&user).await?))
}

/// Requests from the caller's direct reports, all statuses
pub async fn team_requests(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<AbsenceRequestResponse>>> {
    let service = AbsenceService::new(state.pool.clone());
    Ok(Json(service.team_requests(&user).await?))
}

/// Requests from the caller's direct reports still awaiting a decision
pub async fn pending_requests(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<AbsenceRequestResponse>>> {
    let service = AbsenceService::new(state.pool.clone());
    Ok(Json(service.pending_requests(&user).await?))
}

/// Resolve a pending request as the requester's manager
pub async fn respond(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(request_id): Path<String>,
    Json(payload): Json<AbsenceRespond>,
) -> AppResult<Json<AbsenceRequestResponse>> {
    let service = AbsenceService::new(state.pool.clone());
    Ok(Json(service.respond(&user, &request_id, payload).await?))
}
