//! Entry entity representing a single shortname → target redirect.

use serde::{Deserialize, Serialize};

/// A redirect record.
///
/// The registry owns every entry; callers only ever see snapshots, so mutating
/// an `Entry` value never affects the live mapping.
///
/// Serialized as `{"shortname", "target", "requestCount"}`. Older files keyed
/// `Shortname`, `Url` and `Requests` are accepted on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(alias = "Shortname")]
    pub shortname: String,

    #[serde(alias = "Url")]
    pub target: String,

    #[serde(rename = "requestCount", alias = "Requests", default)]
    pub request_count: u64,
}

impl Entry {
    /// Creates a fresh entry with a zero request counter.
    pub fn new(shortname: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            shortname: shortname.into(),
            target: target.into(),
            request_count: 0,
        }
    }
}

/// A validated add request, split into its parts.
///
/// Produced by [`crate::utils::add_request::validate_add_request`]. The stored
/// target is always `{protocol}://{target_path}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    pub protocol: String,
    pub shortname: String,
    pub target_path: String,
}

impl AddRequest {
    /// Returns the fully-qualified target URL.
    pub fn target(&self) -> String {
        format!("{}://{}", self.protocol, self.target_path)
    }
}
