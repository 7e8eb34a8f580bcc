//! DTOs for the JSON links endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Entry;

/// Request to create a redirect.
///
/// The fields follow the same rules as the `/add/...` path: `protocol` is
/// `http`, `https` or `ftp`, `shortname` is alphanumeric, and `target` is the
/// part after `{protocol}://`.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub protocol: String,
    pub shortname: String,
    pub target: String,
}

/// A single redirect as returned by the API.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub shortname: String,
    pub target: String,
    pub request_count: u64,
}

impl From<Entry> for LinkItem {
    fn from(entry: Entry) -> Self {
        Self {
            shortname: entry.shortname,
            target: entry.target,
            request_count: entry.request_count,
        }
    }
}

/// Response for the links listing.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub total: usize,
    pub items: Vec<LinkItem>,
}
