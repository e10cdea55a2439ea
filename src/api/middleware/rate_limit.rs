//! Per-client rate limiting using the token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Rate limiter keyed by the socket peer address.
///
/// Each client may burst up to `burst` requests; one slot is replenished
/// every `replenish_seconds`.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Requires
/// the server to be started with connect info (see [`crate::server::run`]).
///
/// # Errors
///
/// Returns an error if `replenish_seconds` or `burst` is zero.
pub fn layer(
    replenish_seconds: u64,
    burst: u32,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(replenish_seconds)
            .burst_size(burst)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    Ok(GovernorLayer::new(governor_conf))
}

/// Rate limiter keyed by `X-Forwarded-For` / `X-Real-IP` / `Forwarded`,
/// falling back to the peer address.
///
/// Use only behind a trusted reverse proxy: clients can forge these headers.
///
/// # Errors
///
/// Returns an error if `replenish_seconds` or `burst` is zero.
pub fn proxy_layer(
    replenish_seconds: u64,
    burst: u32,
) -> Result<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(replenish_seconds)
            .burst_size(burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    Ok(GovernorLayer::new(governor_conf))
}
