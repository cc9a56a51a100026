use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    response::IntoResponse,
    Json,
};
use movielog_core::models::{MovieResponse, MovieUpdate};
use movielog_core::AppError;
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::{extract_movie_form, validate_image_size};

/// Update movie handler
///
/// Per-field fallback merge: any omitted or empty form field keeps its
/// previous value. When a new image file is attached it is re-uploaded and
/// `imageUrl` replaced; otherwise the prior URL is retained. The previous
/// object is left in place on replacement.
///
/// Failures other than a missing record surface as 400.
#[utoipa::path(
    put,
    path = "/api/v0/movies/{id}",
    tag = "movies",
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Movie updated successfully", body = MovieResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 400, description = "Update failure", body = ErrorResponse),
        (status = 413, description = "Image exceeds the size limit", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(movie_id = %id, operation = "update_movie"))]
pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let form = extract_movie_form(multipart).await?;

    // 404 before any upload side effect
    state
        .movies
        .get(id)
        .await
        .map_err(|e| {
            tracing::debug!(error = %e, movie_id = %id, "Database error fetching movie for update");
            AppError::BadRequest("Failed to update movie".to_string())
        })?
        .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;

    let image_url = match form.image {
        Some(image) => {
            validate_image_size(image.data.len(), state.config.max_image_size_bytes)?;
            let (_, url) = state
                .storage
                .upload(&image.filename, &image.content_type, image.data)
                .await
                .map_err(|e| {
                    tracing::warn!(error = %e, movie_id = %id, "Image re-upload failed");
                    AppError::BadRequest("Image upload failed".to_string())
                })?;
            Some(url)
        }
        None => None,
    };

    let changes = MovieUpdate {
        title: form.title,
        description: form.description,
        image_url,
        genre: form.genre,
        rating: form.rating,
        release_date: form.release_date,
    };

    let movie = state
        .movies
        .update(id, changes)
        .await
        .map_err(|e| match e {
            // Validation failures keep their own message
            AppError::InvalidInput(_) => e,
            other => {
                tracing::debug!(error = %other, movie_id = %id, "Failed to update movie");
                AppError::BadRequest("Failed to update movie".to_string())
            }
        })?
        .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;

    tracing::info!(movie_id = %movie.id, "Movie updated");

    Ok(Json(MovieResponse::from(movie)))
}
