//! HTTP handlers: translate service outcomes to status codes.

use crate::error::AppError;
use crate::model::CardRecord;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub card_type: Option<String>,
}

/// GET /card-data. Always 200; an empty result is `[]`, not an error.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<CardRecord>>, AppError> {
    let rows = state.service.list(params.card_type.as_deref()).await?;
    Ok(Json(rows))
}

/// POST /card-data. 201 with the submitted record when exactly one row was
/// inserted; 400 with an empty body for any other count.
pub async fn create(
    State(state): State<AppState>,
    Json(record): Json<CardRecord>,
) -> Result<Response, AppError> {
    let rows = state.service.create(&record).await?;
    if rows == 1 {
        Ok((StatusCode::CREATED, Json(record)).into_response())
    } else {
        Ok(StatusCode::BAD_REQUEST.into_response())
    }
}

/// DELETE /card-data/{id}. 204 when a row went away, 404 otherwise.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if state.service.delete_by_id(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
