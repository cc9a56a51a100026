//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use movielog_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Headroom over the image cap for text fields and multipart framing; the
/// per-image cap itself is enforced while parsing the form.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let app = movie_routes(state)
        .route("/health", get(handlers::health::health_check))
        .merge(Router::from(
            utoipa_rapidoc::RapiDoc::with_openapi("/api/openapi.json", ApiDoc::openapi())
                .path("/docs"),
        ))
        .layer(RequestBodyLimitLayer::new(
            config.max_image_size_bytes + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

fn movie_routes(state: Arc<AppState>) -> Router<()> {
    Router::new()
        .route(
            &format!("{}/movies", API_PREFIX),
            post(handlers::movie_create::create_movie),
        )
        .route(
            &format!("{}/movies", API_PREFIX),
            get(handlers::movie_list::list_movies),
        )
        .route(
            &format!("{}/movies/{{id}}", API_PREFIX),
            get(handlers::movie_get::get_movie),
        )
        .route(
            &format!("{}/movies/{{id}}", API_PREFIX),
            put(handlers::movie_update::update_movie),
        )
        .route(
            &format!("{}/movies/{{id}}", API_PREFIX),
            delete(handlers::movie_delete::delete_movie),
        )
        .with_state(state)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| o.parse())
            .collect::<Result<Vec<HeaderValue>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(Any)
    };
    Ok(cors)
}
