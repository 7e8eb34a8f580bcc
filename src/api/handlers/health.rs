//! Handler for health check endpoint.

use std::path::Path;

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{ComponentCheck, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Registry**: Reports the number of loaded redirects
/// 2. **Storage**: Checks that the directory holding the redirects file
///    exists and is writable, so the next save can succeed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": { "status": "ok", "message": "3 redirects" },
///     "storage": { "status": "ok", "message": "redirects.json" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let registry = state.link_service.registry();

    let checks = HealthChecks {
        registry: ComponentCheck::ok(format!("{} redirects", registry.len().await)),
        storage: check_storage(&registry.store_location()).await,
    };
    let healthy = checks.all_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks,
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the redirects file's directory is present and writable.
async fn check_storage(location: &str) -> ComponentCheck {
    let dir = match Path::new(location).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    match tokio::fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => ComponentCheck::ok(location),
        Ok(_) => ComponentCheck::error(format!("{} is not a writable directory", dir.display())),
        Err(e) => ComponentCheck::error(format!("Storage error: {}", e)),
    }
}
