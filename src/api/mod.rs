//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into utility calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Extractors reporting rejections as JSON errors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting, panic recovery and tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
