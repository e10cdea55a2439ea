//! Handler for the word count endpoint.

use axum::Json;

use crate::api::dto::count::{CountRequest, CountResponse};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::utils::count_word;

/// Counts non-overlapping occurrences of `word` in `text`.
///
/// # Endpoint
///
/// `POST /count`
///
/// # Request Body
///
/// ```json
/// { "text": "robot robot robot", "word": "robot" }
/// ```
///
/// # Response
///
/// ```json
/// { "count": 3 }
/// ```
///
/// An empty `word` counts character boundaries (`chars + 1`).
pub async fn count_handler(
    ApiJson(payload): ApiJson<CountRequest>,
) -> Result<Json<CountResponse>, AppError> {
    let count = count_word(&payload.text, &payload.word);

    Ok(Json(CountResponse { count }))
}
