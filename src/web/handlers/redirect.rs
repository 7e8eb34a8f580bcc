//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use tracing::debug;

use crate::state::AppState;
use crate::utils::path_resolver::resolve_request_path;
use crate::web::handlers::templates::{found, message_page};

/// Redirects a shortname (plus any trailing path) to its target.
///
/// # Endpoint
///
/// `GET /{*path}`
///
/// # Request Flow
///
/// 1. Split the path: first segment is the shortname, the rest is forwarded
/// 2. Look the shortname up in the registry (counts the request)
/// 3. Return `302 Found` to `target/remainder` with `Cache-Control: private, no-cache`
///
/// # Examples
///
/// With `wiki → http://example.com/Wiki` registered, `GET /wiki/Page`
/// redirects to `http://example.com/Wiki/Page`.
///
/// # Errors
///
/// Returns a `404 Not Found` HTML page if the shortname is unknown.
pub async fn redirect_handler(Path(path): Path<String>, State(state): State<AppState>) -> Response {
    match state.link_service.resolve_link(&path).await {
        Some(resolution) => {
            debug!(
                shortname = %resolution.entry.shortname,
                location = %resolution.location,
                count = resolution.entry.request_count,
                "Redirecting"
            );
            found(&resolution.location)
        }
        None => {
            let shortname = resolve_request_path(&path).shortname;
            debug!(shortname = %shortname, "Shortname not found");
            message_page(
                StatusCode::NOT_FOUND,
                format!("Shortname {} not found!", shortname),
            )
        }
    }
}
