use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use movielog_core::models::{MovieResponse, NewMovie};
use movielog_core::AppError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::{extract_movie_form, validate_image_size};

/// Create movie handler
///
/// Uploads the attached image to the storage backend, then persists the
/// record with the returned URL. The two steps are not transactional: when
/// the insert fails after a successful upload, the stored object is deleted
/// best-effort in a background task.
///
/// # Errors
/// - `AppError::InvalidInput` - Missing image file or invalid form fields
/// - `AppError::Storage` - Image upload failure
/// - `AppError::Database` - Insert failure
#[utoipa::path(
    post,
    path = "/api/v0/movies",
    tag = "movies",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Movie created successfully", body = MovieResponse),
        (status = 400, description = "Missing image file or invalid input", body = ErrorResponse),
        (status = 413, description = "Image exceeds the size limit", body = ErrorResponse),
        (status = 500, description = "Upload or database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "create_movie"))]
pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let form = extract_movie_form(multipart).await?;

    let image = form
        .image
        .ok_or_else(|| AppError::InvalidInput("No image file provided".to_string()))?;

    validate_image_size(image.data.len(), state.config.max_image_size_bytes)?;

    let title = form
        .title
        .ok_or_else(|| AppError::InvalidInput("title is required".to_string()))?;
    let description = form
        .description
        .ok_or_else(|| AppError::InvalidInput("description is required".to_string()))?;
    let genre = form
        .genre
        .ok_or_else(|| AppError::InvalidInput("genre is required".to_string()))?;
    let rating = form
        .rating
        .ok_or_else(|| AppError::InvalidInput("rating is required".to_string()))?;
    let release_date = form
        .release_date
        .ok_or_else(|| AppError::InvalidInput("releaseDate is required".to_string()))?;

    // Validate before the upload side effect so a bad rating never orphans an object
    movielog_core::validation::validate_rating(rating)?;

    let (storage_key, image_url) = state
        .storage
        .upload(&image.filename, &image.content_type, image.data)
        .await
        .map_err(HttpAppError::from)?;

    let movie = match state
        .movies
        .create(NewMovie {
            title,
            description,
            image_url,
            genre,
            rating,
            release_date,
        })
        .await
    {
        Ok(movie) => movie,
        Err(e) => {
            // Best-effort cleanup of the uploaded object; the record was never persisted
            let storage = state.storage.clone();
            tokio::spawn(async move {
                if let Err(cleanup_err) = storage.delete(&storage_key).await {
                    tracing::warn!(
                        error = %cleanup_err,
                        storage_key = %storage_key,
                        "Failed to cleanup storage file after DB error"
                    );
                }
            });
            return Err(HttpAppError::from(e));
        }
    };

    tracing::info!(movie_id = %movie.id, "Movie created");

    Ok((StatusCode::CREATED, Json(MovieResponse::from(movie))))
}
