use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// Movie record as persisted in the database.
///
/// `image_url` is only ever produced by the upload path (create) or retained
/// from the prior row value (update without a new file); it is never accepted
/// directly from a client-supplied value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub genre: String,
    pub rating: f64,
    pub release_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a movie. The image URL has already been produced
/// by the upload gateway at this point.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub genre: String,
    pub rating: f64,
    pub release_date: NaiveDate,
}

/// Per-field fallback merge for updates: `None` keeps the previous value.
///
/// Each field is an explicit `Option` rather than a falsy-value coercion, so
/// legitimate zero/empty-adjacent values (e.g. a rating of 0) still apply.
#[derive(Debug, Clone, Default)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<f64>,
    pub release_date: Option<NaiveDate>,
}

impl MovieUpdate {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.genre.is_none()
            && self.rating.is_none()
            && self.release_date.is_none()
    }
}

/// API response shape for a movie.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub genre: String,
    pub rating: f64,
    pub release_date: NaiveDate,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        MovieResponse {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            image_url: movie.image_url,
            genre: movie.genre,
            rating: movie.rating,
            release_date: movie.release_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_camel_case() {
        let movie = Movie {
            id: Uuid::new_v4(),
            title: "Inception".to_string(),
            description: "A thief who steals corporate secrets".to_string(),
            image_url: "https://bucket.s3.us-east-1.amazonaws.com/movies/a.png".to_string(),
            genre: "Sci-Fi".to_string(),
            rating: 9.0,
            release_date: NaiveDate::from_ymd_opt(2010, 7, 16).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(MovieResponse::from(movie)).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("releaseDate").is_some());
        assert_eq!(json["releaseDate"], "2010-07-16");
        // Bookkeeping columns are not part of the wire shape
        assert!(json.get("createdAt").is_none());
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(MovieUpdate::default().is_empty());
        let update = MovieUpdate {
            rating: Some(0.0),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
