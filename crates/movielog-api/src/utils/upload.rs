//! Multipart form parsing for the movie handlers.
//!
//! Both create and update consume the same form shape: text fields `title`,
//! `description`, `genre`, `rating`, `releaseDate` and a file field `image`.
//! Every field is parsed into an `Option`; an omitted or empty-string text
//! field stays `None` so updates can treat it as "keep previous". Presence
//! requirements are enforced by the handlers, not here.

use axum::extract::Multipart;
use chrono::NaiveDate;
use movielog_core::AppError;

/// An image file pulled out of the multipart form.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub data: Vec<u8>,
    pub filename: String,
    pub content_type: String,
}

/// Movie form fields, all optional at the parsing layer.
#[derive(Debug, Default)]
pub struct MovieForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<f64>,
    pub release_date: Option<NaiveDate>,
    pub image: Option<UploadedImage>,
}

/// Extract movie fields and the optional image file from a multipart form.
/// Only one field named "image" is accepted; multiple file fields are rejected.
pub async fn extract_movie_form(mut multipart: Multipart) -> Result<MovieForm, AppError> {
    let mut form = MovieForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "image" => {
                if form.image.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple image fields are not allowed; send exactly one field named 'image'"
                            .to_string(),
                    ));
                }
                let filename = field
                    .file_name()
                    .map(|s: &str| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let content_type = field
                    .content_type()
                    .map(|s: &str| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read image data: {}", e))
                })?;

                form.image = Some(UploadedImage {
                    data: data.to_vec(),
                    filename,
                    content_type,
                });
            }
            "title" => form.title = read_text(field).await?,
            "description" => form.description = read_text(field).await?,
            "genre" => form.genre = read_text(field).await?,
            "rating" => {
                if let Some(text) = read_text(field).await? {
                    form.rating = Some(parse_rating(&text)?);
                }
            }
            "releaseDate" => {
                if let Some(text) = read_text(field).await? {
                    form.release_date = Some(parse_release_date(&text)?);
                }
            }
            // Unknown fields are ignored, matching default multipart coercion
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<Option<String>, AppError> {
    let name = field.name().map(|s| s.to_string()).unwrap_or_default();
    let text = field
        .text()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read field '{}': {}", name, e)))?;
    Ok(non_empty(text))
}

/// Empty or whitespace-only strings become `None` ("keep previous" on update).
pub fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Reject an image over the configured size cap with a 413.
pub fn validate_image_size(size: usize, max_size: usize) -> Result<(), AppError> {
    if size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "Image size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// Parse a rating form value. Range validation happens in the core validation
/// layer; this only handles numeric coercion.
pub fn parse_rating(value: &str) -> Result<f64, AppError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::InvalidInput(format!("rating must be a number, got '{}'", value)))
}

/// Parse a release date form value as an ISO date (YYYY-MM-DD).
pub fn parse_release_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::InvalidInput(format!(
            "releaseDate must be an ISO date (YYYY-MM-DD), got '{}'",
            value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_becomes_none() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty("Drama".to_string()), Some("Drama".to_string()));
    }

    #[test]
    fn image_size_cap_is_inclusive() {
        assert!(validate_image_size(1024, 1024).is_ok());
        let err = validate_image_size(1025, 1024).unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
    }

    #[test]
    fn rating_coercion() {
        assert_eq!(parse_rating("9").unwrap(), 9.0);
        assert_eq!(parse_rating(" 7.5 ").unwrap(), 7.5);
        assert!(parse_rating("nine").is_err());
    }

    #[test]
    fn release_date_coercion() {
        assert_eq!(
            parse_release_date("2010-07-16").unwrap(),
            NaiveDate::from_ymd_opt(2010, 7, 16).unwrap()
        );
        assert!(parse_release_date("16/07/2010").is_err());
        assert!(parse_release_date("not-a-date").is_err());
    }
}
