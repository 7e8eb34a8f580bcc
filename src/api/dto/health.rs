//! DTOs for the health endpoint.

use serde::Serialize;

/// Overall service health plus one entry per checked component.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub registry: ComponentCheck,
    pub storage: ComponentCheck,
}

impl HealthChecks {
    pub fn all_ok(&self) -> bool {
        self.registry.is_ok() && self.storage.is_ok()
    }
}

/// Outcome of a single component check: `"ok"` or `"error"` with a note.
#[derive(Debug, Serialize)]
pub struct ComponentCheck {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentCheck {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
