use async_trait::async_trait;
use movielog_core::models::{Movie, MovieUpdate, NewMovie};
use movielog_core::validation;
use movielog_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

const MOVIE_COLUMNS: &str =
    "id, title, description, image_url, genre, rating, release_date, created_at, updated_at";

/// Durable storage and retrieval of movie records.
///
/// Malformed identifiers never reach the store; the HTTP layer rejects them
/// at the path extractor. `update` applies a per-field fallback merge: `None`
/// fields keep their previous value.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Persist a new record and return it with its assigned identifier.
    /// Fails if a required field is empty or the rating is out of range.
    async fn create(&self, new: NewMovie) -> Result<Movie, AppError>;

    /// Return all records in insertion order.
    async fn list(&self) -> Result<Vec<Movie>, AppError>;

    /// Return the record, or `None` if the identifier has no match.
    async fn get(&self, id: Uuid) -> Result<Option<Movie>, AppError>;

    /// Merge the supplied fields into the record and return the updated row,
    /// or `None` if the identifier has no match. An empty patch is a no-op
    /// that returns the current row without writing.
    async fn update(&self, id: Uuid, changes: MovieUpdate) -> Result<Option<Movie>, AppError>;

    /// Remove the record permanently. Returns `false` when nothing matched.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

/// Postgres-backed movie repository
#[derive(Clone)]
pub struct MovieRepository {
    pool: PgPool,
}

impl MovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for MovieRepository {
    #[tracing::instrument(skip(self, new), fields(db.table = "movies", db.operation = "insert"))]
    async fn create(&self, new: NewMovie) -> Result<Movie, AppError> {
        validation::validate_new_movie(&new)?;

        let movie = sqlx::query_as::<Postgres, Movie>(&format!(
            r#"
            INSERT INTO movies (title, description, image_url, genre, rating, release_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {MOVIE_COLUMNS}
            "#,
        ))
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.image_url)
        .bind(&new.genre)
        .bind(new.rating)
        .bind(new.release_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(movie)
    }

    #[tracing::instrument(skip(self), fields(db.table = "movies", db.operation = "select"))]
    async fn list(&self) -> Result<Vec<Movie>, AppError> {
        let movies = sqlx::query_as::<Postgres, Movie>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies ORDER BY created_at ASC, id ASC",
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(movies)
    }

    #[tracing::instrument(skip(self), fields(db.table = "movies", db.operation = "select", db.record_id = %id))]
    async fn get(&self, id: Uuid) -> Result<Option<Movie>, AppError> {
        let movie = sqlx::query_as::<Postgres, Movie>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(movie)
    }

    #[tracing::instrument(skip(self, changes), fields(db.table = "movies", db.operation = "update", db.record_id = %id))]
    async fn update(&self, id: Uuid, changes: MovieUpdate) -> Result<Option<Movie>, AppError> {
        validation::validate_movie_update(&changes)?;

        // Nothing to write; hand back the current row
        if changes.is_empty() {
            return self.get(id).await;
        }

        // COALESCE keeps the previous value for every omitted field
        let movie = sqlx::query_as::<Postgres, Movie>(&format!(
            r#"
            UPDATE movies
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                genre = COALESCE($5, genre),
                rating = COALESCE($6, rating),
                release_date = COALESCE($7, release_date),
                updated_at = now()
            WHERE id = $1
            RETURNING {MOVIE_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.image_url)
        .bind(changes.genre)
        .bind(changes.rating)
        .bind(changes.release_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(movie)
    }

    #[tracing::instrument(skip(self), fields(db.table = "movies", db.operation = "delete", db.record_id = %id))]
    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
