//! Top-level router configuration combining web and API routes.
//!
//! # Route Structure
//!
//! - `GET  /{shortname}/{*rest}` - Redirect (catch-all)
//! - `GET  /`, `/list`           - HTML redirect list
//! - `GET  /add/{*path}`         - Add a redirect
//! - `GET  /del/{*shortname}`    - Delete a redirect
//! - `GET  /health`              - Health check
//! - `/api/*`                    - JSON API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .merge(web::routes::management_routes())
        .merge(web::routes::redirect_routes())
        .with_state(state)
        .layer(tracing::layer())
}
