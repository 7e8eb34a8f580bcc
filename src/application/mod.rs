//! Application layer services implementing business logic.
//!
//! Services combine request parsing and validation with registry operations
//! and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Add, delete, resolve and list links

pub mod services;
