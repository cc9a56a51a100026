//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use movielog_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movielog API",
        version = "0.1.0",
        description = "Movie catalog API (v0). CRUD over movie records with poster images stored on S3 or a local backend. All endpoints are versioned under /api/v0/."
    ),
    paths(
        handlers::movie_create::create_movie,
        handlers::movie_list::list_movies,
        handlers::movie_get::get_movie,
        handlers::movie_update::update_movie,
        handlers::movie_delete::delete_movie,
    ),
    components(schemas(
        models::MovieResponse,
        handlers::movie_delete::MessageResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "movies", description = "Movie record operations")
    )
)]
pub struct ApiDoc;
