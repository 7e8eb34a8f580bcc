//! Domain layer containing the redirect model and the registry.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`registry`] - The concurrent, disk-backed redirect registry
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Storage traits define contracts implemented by the infrastructure layer
//! - Request-level orchestration lives in [`crate::application::services`]
//!
//! # Mutation Flow
//!
//! 1. HTTP handler receives an add or delete request
//! 2. [`crate::application::services::LinkService`] validates the input
//! 3. [`registry::RedirectRegistry`] mutates the set under its write lock
//! 4. The full set is written via [`repositories::EntryStore::save`] before
//!    the lock is released

pub mod entities;
pub mod registry;
pub mod repositories;
