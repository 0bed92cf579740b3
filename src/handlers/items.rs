use axum::{
    Json,
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::{location_of, parse_id};
use crate::middleware::ApiJson;
use crate::types::item::{ItemPayload, ItemResponse};
use crate::{ApiError, router::AppState};

/// GET /api/items
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    Ok(Json(state.items.list().await?))
}

/// POST /api/items -> 201 with the stored item and its `Location`.
pub async fn create_item(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiJson(payload): ApiJson<ItemPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.items.create(payload).await?;
    Ok((StatusCode::CREATED, location_of(&uri, item.id), Json(item)))
}

/// GET /api/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.items.get(id).await?))
}

/// PATCH /api/items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<ItemPayload>,
) -> Result<Json<ItemResponse>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.items.update(id, payload).await?))
}

/// DELETE /api/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.items.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/items/user/{user_id}
pub async fn list_user_items(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let user_id = parse_id(&user_id)?;
    Ok(Json(state.items.list_for_user(user_id).await?))
}
