//! Movielog Storage Library
//!
//! This crate provides the image upload gateway: the Storage trait and
//! implementations for S3 (and S3-compatible providers) and the local filesystem.
//!
//! # Storage key format
//!
//! All backends use the same key layout: `movies/{uuid}.{ext}`, where the
//! extension is sanitized from the original filename. Keys must not contain
//! `..` or a leading `/`. Key generation is centralized in the `keys` module
//! so all backends stay consistent.

pub mod factory;
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use movielog_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
