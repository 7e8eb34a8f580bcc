//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    add_link_handler, add_usage_handler, delete_empty_handler, delete_link_handler, list_handler,
    redirect_handler,
};
use axum::{Router, routing::get};

/// Management pages.
///
/// # Endpoints
///
/// - `GET /`                  - Redirect list
/// - `GET /list`              - Redirect list
/// - `GET /add/{*path}`       - Add `{protocol}/{shortname}/{target...}`
/// - `GET /add/`              - Usage hint (400)
/// - `GET /del/{*shortname}`  - Delete a shortname
/// - `GET /del/`              - Back to the list
pub fn management_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_handler))
        .route("/list", get(list_handler))
        .route("/list/", get(list_handler))
        .route("/add/", get(add_usage_handler))
        .route("/add/{*path}", get(add_link_handler))
        .route("/del/", get(delete_empty_handler))
        .route("/del/{*shortname}", get(delete_link_handler))
}

/// Catch-all redirect route.
///
/// Static routes take priority; anything not matched elsewhere is treated
/// as `/{shortname}/{remainder...}`.
pub fn redirect_routes() -> Router<AppState> {
    Router::new().route("/{*path}", get(redirect_handler))
}
