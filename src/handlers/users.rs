use axum::{
    Json,
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::{location_of, parse_id};
use crate::middleware::ApiJson;
use crate::types::user::{RegisterPayload, UserResponse};
use crate::{ApiError, router::AppState};

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    Ok(Json(state.users.list().await?))
}

/// POST /api/users -> 201 with `{id, email}`; the password never leaves the server.
pub async fn register_user(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiJson(payload): ApiJson<RegisterPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.users.register(payload).await?;
    Ok((StatusCode::CREATED, location_of(&uri, user.id), Json(user)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.users.get(id).await?))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
