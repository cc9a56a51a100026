use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use movielog_core::models::MovieResponse;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// List all movies, in insertion order.
#[utoipa::path(
    get,
    path = "/api/v0/movies",
    tag = "movies",
    responses(
        (status = 200, description = "All movies", body = [MovieResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let movies = state.movies.list().await.map_err(HttpAppError::from)?;

    let response: Vec<MovieResponse> = movies.into_iter().map(MovieResponse::from).collect();

    Ok(Json(response))
}
