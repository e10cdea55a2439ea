//! Extractor wrappers that report rejections as [`AppError`].
//!
//! Axum's stock `Json` and `Query` extractors answer with plain-text bodies.
//! These wrappers route the rejection through [`AppError`] so malformed input
//! gets the same `{"detail": ...}` shape as every other error.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor with [`AppError`] rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
