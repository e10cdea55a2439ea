//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Status message
//! - `GET  /health`    - Liveness probe
//! - `GET  /lotto`     - Lotto numbers
//! - `POST /password`  - Website password
//! - `POST /count`     - Word count
//!
//! Unknown paths answer `404` and unsupported methods `405`, both with a
//! JSON `detail` body.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Optional per-IP token bucket
//! - **Panic recovery** - Panics become generic `500` responses
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{method_not_allowed_handler, not_found_handler};
use crate::api::middleware::{panic, rate_limit, tracing};
use crate::config::RateLimitConfig;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - per-client limits, or `None` to disable rate limiting;
///   when enabled the server must provide connect info
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn app_router(
    state: AppState,
    rate_limit: Option<&RateLimitConfig>,
) -> Result<NormalizePath<Router>> {
    let mut router = Router::new()
        .merge(api::routes::routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
        .layer(panic::layer());

    if let Some(limits) = rate_limit {
        router = if limits.behind_proxy {
            router.layer(rate_limit::proxy_layer(
                limits.replenish_seconds,
                limits.burst,
            )?)
        } else {
            router.layer(rate_limit::layer(limits.replenish_seconds, limits.burst)?)
        };
    }

    let router = router.layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
