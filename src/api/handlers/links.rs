//! JSON handlers for link management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use serde_json::json;

use crate::api::dto::links::{CreateLinkRequest, LinkItem, LinkListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every redirect in insertion order.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// ```json
/// {
///   "total": 1,
///   "items": [
///     { "shortname": "wiki", "target": "http://example.com/Wiki", "request_count": 4 }
///   ]
/// }
/// ```
pub async fn list_links_handler(State(state): State<AppState>) -> Json<LinkListResponse> {
    let items: Vec<LinkItem> = state
        .link_service
        .list_links()
        .await
        .into_iter()
        .map(LinkItem::from)
        .collect();

    Json(LinkListResponse {
        total: items.len(),
        items,
    })
}

/// Returns one redirect. The lookup does not count as a request.
///
/// # Endpoint
///
/// `GET /api/links/{shortname}`
///
/// # Errors
///
/// Returns 404 if the shortname is unknown.
pub async fn get_link_handler(
    Path(shortname): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkItem>, AppError> {
    state
        .link_service
        .get_link(&shortname)
        .await
        .map(|entry| Json(entry.into()))
        .ok_or_else(|| {
            AppError::not_found("Shortname not found", json!({ "shortname": shortname }))
        })
}

/// Creates a redirect.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "protocol": "http", "shortname": "wiki", "target": "example.com/Wiki" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request** if a field fails validation
/// - **409 Conflict** if the shortname exists; `details.existing_target`
///   holds its current target
/// - **500 Internal Server Error** if the change could not be saved
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkItem>), AppError> {
    let entry = state
        .link_service
        .add_link_parts(&payload.protocol, &payload.shortname, &payload.target)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}

/// Deletes a redirect.
///
/// # Endpoint
///
/// `DELETE /api/links/{shortname}`
///
/// # Behavior
///
/// Always answers **204 No Content** on success, including for shortnames
/// that do not exist.
///
/// # Errors
///
/// Returns 500 if the removal could not be saved.
pub async fn delete_link_handler(
    Path(shortname): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&shortname).await?;
    Ok(StatusCode::NO_CONTENT)
}
