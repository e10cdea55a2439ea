//! DTOs for the word count endpoint.

use serde::{Deserialize, Serialize};

/// Request body of `POST /count`. Either field may be empty.
#[derive(Debug, Deserialize)]
pub struct CountRequest {
    pub text: String,
    pub word: String,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: usize,
}
