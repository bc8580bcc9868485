//! Authentication Handlers

use axum::{Json, extract::State};
use serde::Serialize;
use shared::models::{LoginRequest, LoginResponse, Role};

use crate::auth::{CurrentUser, verify_password};
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::utils::{AppError, AppResult};

/// Authenticated principal as returned by `/api/auth/me`
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub role: Role,
}

/// Login handler
///
/// Verifies username/password and returns a bearer token. Unknown username
/// and wrong password produce the same error.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let users = UserRepository::new(state.pool.clone());

    let user = users
        .find_by_username(&req.username)
        .await
        .map_err(AppError::from)?
        .ok_or_else(AppError::invalid_credentials)?;

    if !verify_password(&req.password, &user.hash_pass) {
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(&user.id, &user.username, user.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = %user.id,
        username = %user.username,
        role = %user.role,
        "User logged in successfully"
    );

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        username: user.username,
        role: user.role,
    }))
}

/// Return the authenticated principal
pub async fn me(user: CurrentUser) -> Json<UserInfo> {
    Json(UserInfo {
        id: user.id,
        username: user.username,
        role: user.role,
    })
}
