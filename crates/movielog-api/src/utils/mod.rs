//! Handler utilities

pub mod upload;
