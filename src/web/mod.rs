//! Browser-facing layer: redirects and the plain HTML management pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Redirect, add, delete and list handlers
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod routes;
