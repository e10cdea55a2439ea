//! DTOs for the password endpoint.

use serde::{Deserialize, Serialize};

/// Request body of `POST /password`.
#[derive(Debug, Deserialize)]
pub struct PasswordRequest {
    pub website: String,
}

#[derive(Debug, Serialize)]
pub struct PasswordResponse {
    pub password: String,
}
