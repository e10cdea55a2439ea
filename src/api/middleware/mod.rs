//! HTTP middleware for request processing and protection.
//!
//! Provides rate limiting, panic recovery and observability middleware.

pub mod panic;
pub mod rate_limit;
pub mod tracing;
