//! Sport CRUD handlers: list, create, update, delete.

use crate::error::AppError;
use crate::extractors::{json::decode_object, JsonObject};
use crate::model::{Sport, SportPayload};
use crate::response::{ErrorMessage, ViolationList};
use crate::service::SportService;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// A path id that is not an integer cannot name a stored sport.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::NotFound)
}

#[utoipa::path(
    get,
    path = "/api/sports",
    tag = "sports",
    responses(
        (status = 200, description = "All sports", body = [Sport]),
        (status = 500, description = "Store failure", body = ErrorMessage),
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Sport>>, AppError> {
    let sports = SportService::list(state.repo.as_ref()).await?;
    Ok(Json(sports))
}

#[utoipa::path(
    post,
    path = "/api/sports/new",
    tag = "sports",
    request_body = SportPayload,
    responses(
        (status = 201, description = "Sport created"),
        (status = 400, description = "Malformed body or validation failure", body = ViolationList),
        (status = 500, description = "Store failure", body = ErrorMessage),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonObject(payload): JsonObject<SportPayload>,
) -> Result<StatusCode, AppError> {
    SportService::create(state.repo.as_ref(), payload).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    put,
    path = "/api/sports/{id}",
    description = "Unknown ids answer 404 before the body is read.",
    tag = "sports",
    params(("id" = i64, Path, description = "Sport id")),
    request_body = SportPayload,
    responses(
        (status = 204, description = "Sport updated"),
        (status = 400, description = "Malformed body or validation failure", body = ViolationList),
        (status = 404, description = "No sport with this id"),
        (status = 500, description = "Store failure", body = ErrorMessage),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    let current = SportService::get(state.repo.as_ref(), id).await?;
    let payload = decode_object::<SportPayload>(&body)?;
    SportService::update(state.repo.as_ref(), &current, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/sports/{id}",
    tag = "sports",
    params(("id" = i64, Path, description = "Sport id")),
    responses(
        (status = 204, description = "Sport deleted"),
        (status = 404, description = "No sport with this id"),
        (status = 500, description = "Store failure", body = ErrorMessage),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    SportService::delete(state.repo.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
