//! API constants

/// API base path prefix; all movie routes are versioned under it.
pub const API_PREFIX: &str = "/api/v0";
