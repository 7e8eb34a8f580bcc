//! Validation of add-link request paths.
//!
//! An add request is encoded in the path as
//! `{protocol}/{shortname}/{target-path...}`, e.g. `http/wiki/example.com/Wiki`.

use crate::domain::entities::AddRequest;
use regex::Regex;
use std::sync::LazyLock;

/// Protocols a target may use.
pub const ALLOWED_PROTOCOLS: &[&str] = &["http", "https", "ftp"];

/// Usage hint shown to clients sending a malformed add request.
pub const ADD_REQUEST_USAGE: &str =
    "Request should be of form /add/<protocol eg. http, https, ftp>/<shortname>/<redirect>";

/// Shortnames taken by fixed routes. A redirect under one of these would
/// only be reachable with a trailing path.
pub const RESERVED_SHORTNAMES: &[&str] = &["add", "api", "del", "health", "list"];

static SHORTNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid shortname regex"));

static TARGET_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 =_./:-]+$").expect("valid target path regex"));

/// Reasons an add request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Add request must have the form protocol/shortname/target")]
    Shape,

    #[error("Unsupported protocol '{0}' (expected http, https or ftp)")]
    Protocol(String),

    #[error("Shortname '{0}' may only contain letters and digits")]
    Shortname(String),

    #[error("Shortname '{0}' is reserved")]
    Reserved(String),

    #[error("Target path '{0}' contains unsupported characters")]
    TargetPath(String),
}

/// Parses and validates a raw add-request path.
///
/// The path is split on `/` and every segment is trimmed of surrounding
/// whitespace before validation; the trimmed values are what gets stored.
/// A single leading `/` is ignored.
///
/// # Rules
///
/// - At least three segments
/// - `protocol` is one of [`ALLOWED_PROTOCOLS`]
/// - `shortname` matches `[A-Za-z0-9]+` and is not in [`RESERVED_SHORTNAMES`]
/// - The remaining segments, re-joined with `/`, are non-empty and match
///   `[A-Za-z0-9 =_./:-]+`
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
///
/// # Examples
///
/// ```ignore
/// let request = validate_add_request("http/wiki/example.com/Wiki").unwrap();
/// assert_eq!(request.target(), "http://example.com/Wiki");
///
/// assert!(validate_add_request("ftp//badshort/x").is_err());
/// ```
pub fn validate_add_request(raw_path: &str) -> Result<AddRequest, ValidationError> {
    let path = raw_path.strip_prefix('/').unwrap_or(raw_path);
    let segments: Vec<&str> = path.split('/').map(str::trim).collect();

    if segments.len() < 3 {
        return Err(ValidationError::Shape);
    }

    validate_add_parts(segments[0], segments[1], &segments[2..].join("/"))
}

/// Validates an add request whose parts are already separated.
///
/// Applies the same rules as [`validate_add_request`]; each `/`-separated
/// segment of `target_path` is trimmed.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_add_parts(
    protocol: &str,
    shortname: &str,
    target_path: &str,
) -> Result<AddRequest, ValidationError> {
    let protocol = protocol.trim();
    let shortname = shortname.trim();
    let target_path = target_path
        .split('/')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("/");

    if !ALLOWED_PROTOCOLS.contains(&protocol) {
        return Err(ValidationError::Protocol(protocol.to_string()));
    }

    if !SHORTNAME_REGEX.is_match(shortname) {
        return Err(ValidationError::Shortname(shortname.to_string()));
    }

    if RESERVED_SHORTNAMES.contains(&shortname) {
        return Err(ValidationError::Reserved(shortname.to_string()));
    }

    if !TARGET_PATH_REGEX.is_match(&target_path) {
        return Err(ValidationError::TargetPath(target_path));
    }

    Ok(AddRequest {
        protocol: protocol.to_string(),
        shortname: shortname.to_string(),
        target_path,
    })
}
