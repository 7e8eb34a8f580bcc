//! Core domain entities.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`Entry`] - A shortname → target redirect record
//! - [`AddRequest`] - A validated request to create an entry

pub mod entry;

pub use entry::{AddRequest, Entry};
