//! HTML handlers for link management (add, delete, list).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::domain::registry::RegistryError;
use crate::state::AppState;
use crate::utils::add_request::ADD_REQUEST_USAGE;
use crate::web::handlers::templates::{ListTemplate, found, message_page};

/// Adds a redirect encoded in the path.
///
/// # Endpoint
///
/// `GET /add/{protocol}/{shortname}/{target...}`
///
/// # Responses
///
/// - **302 Found** to `/list` on success
/// - **400 Bad Request** with a usage hint if the path is malformed
/// - **409 Conflict** with "Shortname already points to ..." if taken
/// - **500 Internal Server Error** if the change could not be saved; the
///   redirect is live in memory but may not survive a restart
pub async fn add_link_handler(Path(path): Path<String>, State(state): State<AppState>) -> Response {
    match state.link_service.add_link(&path).await {
        Ok(_) => found("/list"),
        Err(RegistryError::Validation(e)) => {
            warn!(path = %path, error = %e, "Rejected add request");
            message_page(StatusCode::BAD_REQUEST, ADD_REQUEST_USAGE)
        }
        Err(RegistryError::DuplicateShortname {
            existing_target, ..
        }) => message_page(
            StatusCode::CONFLICT,
            format!("Shortname already points to {}", existing_target),
        ),
        Err(e) => {
            warn!(error = %e, "Failed to add redirect");
            message_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error saving redirect.",
            )
        }
    }
}

/// Deletes a redirect and returns to the list.
///
/// # Endpoint
///
/// `GET /del/{shortname}`
///
/// # Behavior
///
/// Unknown shortnames are ignored: the response is the same redirect to
/// `/list` as for a successful delete.
///
/// # Errors
///
/// Returns a `500` HTML page if the removal could not be saved.
pub async fn delete_link_handler(
    Path(shortname): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.link_service.delete_link(&shortname).await {
        Ok(_) => found("/list"),
        Err(e) => {
            warn!(error = %e, "Failed to delete redirect");
            message_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error deleting redirect.",
            )
        }
    }
}

/// `GET /del/` with no shortname: nothing to delete, back to the list.
pub async fn delete_empty_handler() -> Response {
    found("/list")
}

/// `GET /add/` with no request: usage hint.
pub async fn add_usage_handler() -> Response {
    message_page(StatusCode::BAD_REQUEST, ADD_REQUEST_USAGE)
}

/// Renders every redirect with its request count.
///
/// # Endpoint
///
/// `GET /list`
pub async fn list_handler(State(state): State<AppState>) -> impl IntoResponse {
    ListTemplate {
        entries: state.link_service.list_links().await,
    }
}
