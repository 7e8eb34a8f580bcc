//! File-backed repository implementations.
//!
//! # Repositories
//!
//! - [`JsonFileStore`] - Redirect set stored as a JSON array on disk

pub mod json_file_store;

pub use json_file_store::JsonFileStore;
