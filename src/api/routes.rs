//! API route configuration.

use crate::api::handlers::{
    count_handler, health_handler, lotto_handler, password_handler, root_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public API routes.
///
/// # Endpoints
///
/// - `GET  /`          - Service status message
/// - `GET  /health`    - Liveness probe
/// - `GET  /lotto`     - Draw unique lotto numbers
/// - `POST /password`  - Derive a password from a website
/// - `POST /count`     - Count non-overlapping word occurrences
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/lotto", get(lotto_handler))
        .route("/password", post(password_handler))
        .route("/count", post(count_handler))
}
