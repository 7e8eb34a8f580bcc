//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET    /links`             - List redirects
/// - `POST   /links`             - Create a redirect
/// - `GET    /links/{shortname}` - One redirect, 404 if unknown
/// - `DELETE /links/{shortname}` - Delete a redirect (absent is a no-op)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{shortname}",
            get(get_link_handler).delete(delete_link_handler),
        )
}
