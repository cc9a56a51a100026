//! Field validation for movie records.
//!
//! Presence and range checks live here so both the HTTP boundary and the
//! record store enforce the same invariants.

use crate::error::AppError;
use crate::models::{MovieUpdate, NewMovie};

pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 10.0;

/// Validate the rating bound [0, 10] (inclusive).
pub fn validate_rating(rating: f64) -> Result<(), AppError> {
    if !rating.is_finite() || !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(AppError::InvalidInput(format!(
            "rating must be between {} and {}, got {}",
            RATING_MIN, RATING_MAX, rating
        )));
    }
    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Validate all required fields of a new movie record.
pub fn validate_new_movie(movie: &NewMovie) -> Result<(), AppError> {
    require_non_empty("title", &movie.title)?;
    require_non_empty("description", &movie.description)?;
    require_non_empty("imageUrl", &movie.image_url)?;
    require_non_empty("genre", &movie.genre)?;
    validate_rating(movie.rating)?;
    Ok(())
}

/// Validate the fields an update actually carries.
pub fn validate_movie_update(update: &MovieUpdate) -> Result<(), AppError> {
    if let Some(rating) = update.rating {
        validate_rating(rating)?;
    }
    Ok(())
}
