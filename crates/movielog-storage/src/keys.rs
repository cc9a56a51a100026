//! Shared key generation for storage backends.
//!
//! Key format: `movies/{uuid}.{ext}`, with the extension sanitized from the
//! original filename.

use uuid::Uuid;

/// Generate a fresh storage key for an uploaded image.
///
/// The original filename only contributes its extension (lowercased,
/// alphanumeric characters only); the name itself is replaced with a UUID so
/// keys never collide and never carry client-controlled path fragments.
pub fn generate_storage_key(original_filename: &str) -> String {
    match sanitized_extension(original_filename) {
        Some(ext) => format!("movies/{}.{}", Uuid::new_v4(), ext),
        None => format!("movies/{}", Uuid::new_v4()),
    }
}

fn sanitized_extension(filename: &str) -> Option<String> {
    let ext = filename.rsplit_once('.')?.1;
    if ext.is_empty() || ext.len() > 8 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
