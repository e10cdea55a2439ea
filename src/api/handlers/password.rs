//! Handler for the password endpoint.

use axum::Json;

use crate::api::dto::password::{PasswordRequest, PasswordResponse};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::utils::generate_password;

/// Derives a password from a website address.
///
/// # Endpoint
///
/// `POST /password`
///
/// # Request Body
///
/// ```json
/// { "website": "http://www.google.com.test" }
/// ```
///
/// # Response
///
/// ```json
/// { "password": "goo62!" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with the library message when the website is
/// empty or has no usable segment.
pub async fn password_handler(
    ApiJson(payload): ApiJson<PasswordRequest>,
) -> Result<Json<PasswordResponse>, AppError> {
    let password = generate_password(&payload.website)?;

    Ok(Json(PasswordResponse { password }))
}
