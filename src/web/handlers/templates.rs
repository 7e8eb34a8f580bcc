//! Askama templates and small response helpers shared by the HTML handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::entities::Entry;

/// Template for the redirect list page.
///
/// Renders `templates/list.html`, one line per entry in insertion order.
#[derive(Template, WebTemplate)]
#[template(path = "list.html")]
pub struct ListTemplate {
    pub entries: Vec<Entry>,
}

/// Template for a single user-facing message.
///
/// Renders `templates/message.html`. The message is HTML-escaped.
#[derive(Template, WebTemplate)]
#[template(path = "message.html")]
pub struct MessageTemplate {
    pub message: String,
}

/// Renders `message` as an HTML page with the given status.
pub fn message_page(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        MessageTemplate {
            message: message.into(),
        },
    )
        .into_response()
}

/// Builds a `302 Found` response pointing at `location`.
///
/// Bytes outside visible ASCII (spaces, non-ASCII path segments) are
/// percent-encoded so the `Location` header is always valid.
pub fn found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [
            (header::LOCATION, encode_location(location)),
            (header::CACHE_CONTROL, "private, no-cache".to_string()),
        ],
    )
        .into_response()
}

fn encode_location(location: &str) -> String {
    let mut encoded = String::with_capacity(location.len());
    for byte in location.bytes() {
        if byte.is_ascii_graphic() {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}
