//! Fallbacks for unknown routes and unsupported methods.

use crate::error::AppError;

/// Answers requests that match no route.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("Not Found")
}

/// Answers requests whose path exists but whose method does not.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed("Method Not Allowed")
}
