use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use movielog_core::AppError;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Confirmation body for deletions.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Delete a movie permanently. The record is removed; the stored image is
/// left in place (no soft-delete or audit trail either way).
#[utoipa::path(
    delete,
    path = "/api/v0/movies/{id}",
    tag = "movies",
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted successfully", body = MessageResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(movie_id = %id, operation = "delete_movie"))]
pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.movies.delete(id).await.map_err(HttpAppError::from)?;

    if !deleted {
        return Err(AppError::NotFound("Movie not found".to_string()).into());
    }

    tracing::info!(movie_id = %id, "Movie deleted");

    Ok(Json(MessageResponse {
        message: "Movie deleted successfully".to_string(),
    }))
}
