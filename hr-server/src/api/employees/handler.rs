//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use shared::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate, OwnProfileUpdate};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::services::EmployeeService;
use crate::utils::{AppError, AppResult};

/// List employees visible to the caller
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let service = EmployeeService::new(state.pool.clone());
    Ok(Json(service.list(&user).await?))
}

/// Get the caller's own profile
pub async fn my_profile(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<EmployeeResponse>> {
    let service = EmployeeService::new(state.pool.clone());
    Ok(Json(service.my_profile(&user).await?))
}

/// Update the caller's own profile
pub async fn update_my_profile(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<OwnProfileUpdate>,
) -> AppResult<Json<EmployeeResponse>> {
    payload.validate()?;
    let service = EmployeeService::new(state.pool.clone());
    Ok(Json(service.update_own_profile(&user, payload).await?))
}

/// List manager-like employees (position contains "manager" or "lead")
pub async fn managers(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let service = EmployeeService::new(state.pool.clone());
    let managers = service
        .list(&user)
        .await?
        .into_iter()
        .filter(|e| {
            let position = e.position.to_lowercase();
            position.contains("manager") || position.contains("lead")
        })
        .collect();
    Ok(Json(managers))
}

/// Get employee by id (visibility-scoped; forbidden reads 404)
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeResponse>> {
    let service = EmployeeService::new(state.pool.clone());
    Ok(Json(service.get(&user, &id).await?))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let service = EmployeeService::new(state.pool.clone());
    let created = service.create(&user, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<EmployeeResponse>> {
    payload.validate()?;
    let service = EmployeeService::new(state.pool.clone());
    Ok(Json(service.update(&user, &id, payload).await?))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let service = EmployeeService::new(state.pool.clone());
    if service.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("Employee {} not found", id)))
    }
}
