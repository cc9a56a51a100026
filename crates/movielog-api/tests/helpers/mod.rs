//! Test helpers: an in-memory movie store and a router wired with test doubles.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use chrono::Utc;
use std::sync::Arc;
use std::sync::Mutex;
use tempfile::TempDir;
use uuid::Uuid;

use movielog_api::setup::routes::setup_routes;
use movielog_api::state::AppState;
use movielog_core::models::{Movie, MovieUpdate, NewMovie};
use movielog_core::{validation, AppError, Config, StorageBackend};
use movielog_db::MovieStore;
use movielog_storage::LocalStorage;

/// In-memory MovieStore double. Preserves insertion order like the Postgres
/// repository's `ORDER BY created_at, id`.
#[derive(Default)]
pub struct InMemoryMovieStore {
    movies: Mutex<Vec<Movie>>,
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn create(&self, new: NewMovie) -> Result<Movie, AppError> {
        validation::validate_new_movie(&new)?;

        let now = Utc::now();
        let movie = Movie {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            image_url: new.image_url,
            genre: new.genre,
            rating: new.rating,
            release_date: new.release_date,
            created_at: now,
            updated_at: now,
        };
        self.movies.lock().unwrap().push(movie.clone());
        Ok(movie)
    }

    async fn list(&self) -> Result<Vec<Movie>, AppError> {
        Ok(self.movies.lock().unwrap().clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Movie>, AppError> {
        Ok(self
            .movies
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn update(&self, id: Uuid, changes: MovieUpdate) -> Result<Option<Movie>, AppError> {
        validation::validate_movie_update(&changes)?;

        if changes.is_empty() {
            return self.get(id).await;
        }

        let mut movies = self.movies.lock().unwrap();
        let Some(movie) = movies.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            movie.title = title;
        }
        if let Some(description) = changes.description {
            movie.description = description;
        }
        if let Some(image_url) = changes.image_url {
            movie.image_url = image_url;
        }
        if let Some(genre) = changes.genre {
            movie.genre = genre;
        }
        if let Some(rating) = changes.rating {
            movie.rating = rating;
        }
        if let Some(release_date) = changes.release_date {
            movie.release_date = release_date;
        }
        movie.updated_at = Utc::now();

        Ok(Some(movie.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut movies = self.movies.lock().unwrap();
        let before = movies.len();
        movies.retain(|m| m.id != id);
        Ok(movies.len() < before)
    }
}

/// Test application with an isolated storage directory.
pub struct TestApp {
    pub server: TestServer,
    pub base_url: String,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

fn test_config() -> Config {
    Config {
        server_port: 4000,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        database_url: "postgres://unused-in-tests".to_string(),
        db_max_connections: 5,
        db_timeout_seconds: 5,
        storage_backend: Some(StorageBackend::Local),
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        aws_region: None,
        local_storage_path: None,
        local_storage_base_url: None,
        max_image_size_bytes: 10 * 1024 * 1024,
    }
}

/// Setup a test application with an in-memory store and tempdir storage.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_image_cap(10 * 1024 * 1024).await
}

/// Same as `setup_test_app` but with a specific per-image size cap.
pub async fn setup_test_app_with_image_cap(max_image_size_bytes: usize) -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let base_url = "http://localhost:4000/media".to_string();
    let storage = LocalStorage::new(temp_dir.path(), base_url.clone())
        .await
        .expect("Failed to create local storage");

    let mut config = test_config();
    config.max_image_size_bytes = max_image_size_bytes;
    let state = Arc::new(AppState::new(
        config.clone(),
        Arc::new(InMemoryMovieStore::default()),
        Arc::new(storage),
    ));

    let router = setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        base_url,
        _temp_dir: temp_dir,
    }
}

/// A minimal valid 1x1 PNG.
pub fn test_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
        0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 dimensions
        0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49,
        0x44, 0x41, 0x54, // IDAT chunk
        0x08, 0xD7, 0x63, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xDD,
        0x8D, 0x89, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60,
        0x82, // IEND chunk
    ]
}

/// Multipart form for a complete, valid movie with an image attached.
pub fn inception_form() -> MultipartForm {
    movie_form(true)
}

/// Multipart form with every text field but no image.
pub fn movie_form_without_image() -> MultipartForm {
    movie_form(false)
}

fn movie_form(with_image: bool) -> MultipartForm {
    let mut form = MultipartForm::new()
        .add_text("title", "Inception")
        .add_text("description", "A thief who steals corporate secrets")
        .add_text("genre", "Sci-Fi")
        .add_text("rating", "9")
        .add_text("releaseDate", "2010-07-16");

    if with_image {
        let part = Part::bytes(test_png())
            .file_name("poster.png")
            .mime_type("image/png");
        form = form.add_part("image", part);
    }

    form
}
