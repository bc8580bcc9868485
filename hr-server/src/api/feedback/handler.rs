//! Feedback API Handlers

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use shared::models::{FeedbackCreate, FeedbackResponse};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::services::FeedbackService;
use crate::utils::AppResult;

/// Give feedback to another employee
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<FeedbackCreate>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let service = FeedbackService::new(state.pool.clone());
    let created = service.create(&user, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Feedback addressed to the caller
pub async fn received(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<FeedbackResponse>>> {
    let service = FeedbackService::new(state.pool.clone());
    Ok(Json(service.received(&user).await?))
}

/// Feedback written by the caller
pub async fn given(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<FeedbackResponse>>> {
    let service = FeedbackService::new(state.pool.clone());
    Ok(Json(service.given(&user).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestQuery {
    pub employee_name: String,
    pub context: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct SuggestResponse {
    pub suggestion: String,
}

/// Proxy a feedback suggestion from the external text-generation API.
/// Never fails: every upstream problem degrades to a fixed fallback string.
pub async fn suggest(
    State(state): State<ServerState>,
    Query(query): Query<SuggestQuery>,
) -> Json<SuggestResponse> {
    let suggestion = state
        .suggestion
        .generate(&query.employee_name, query.context.as_deref())
        .await;
    Json(SuggestResponse { suggestion })
}
