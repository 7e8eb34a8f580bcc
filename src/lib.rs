//! # golinks
//!
//! A small short-link redirector: maps short names to target URLs, redirects
//! requests accordingly, and keeps the mapping in a JSON file on disk.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The `Entry` model, the storage trait and
//!   the concurrent [`domain::registry::RedirectRegistry`]
//! - **Application Layer** ([`application`]) - Request parsing and validation
//!   on top of the registry
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file persistence
//! - **API Layer** ([`api`]) - JSON endpoints, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Redirects and the HTML management pages
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service (creates redirects.json on the first add)
//! cargo run -- --http-port 8080 --config redirects.json
//!
//! # Add, use, and delete a redirect
//! curl -i localhost:8080/add/http/wiki/example.com/Wiki
//! curl -i localhost:8080/wiki/Page      # 302 -> http://example.com/Wiki/Page
//! curl -i localhost:8080/del/wiki
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, Resolution};
    pub use crate::domain::entities::Entry;
    pub use crate::domain::registry::{CorruptFilePolicy, RedirectRegistry, RegistryError};
    pub use crate::domain::repositories::{EntryStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::JsonFileStore;
    pub use crate::state::AppState;
}
