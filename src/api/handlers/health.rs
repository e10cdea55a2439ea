//! Handlers for the service status endpoints.

use axum::Json;

use crate::api::dto::health::{HealthResponse, MessageResponse};

/// Reports that the service is up.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// { "message": "ws-utils service running" }
/// ```
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!("{} service running", env!("CARGO_PKG_NAME")),
    })
}

/// Liveness probe.
///
/// The service has no external dependencies, so it is healthy whenever it
/// can answer.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// { "status": "ok" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
