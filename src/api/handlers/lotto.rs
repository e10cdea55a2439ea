//! Handler for the lotto endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::lotto::{LottoQuery, LottoResponse};
use crate::api::extract::ApiQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Draws unique lotto numbers.
///
/// # Endpoint
///
/// `GET /lotto?count=6`
///
/// # Query Parameters
///
/// - `count` (optional): How many numbers to draw, 1 to 10 (default: 6)
///
/// # Response
///
/// ```json
/// { "numbers": [17, 3, 42, 8, 25, 31] }
/// ```
///
/// Numbers come from `1..=45`, are distinct and are not sorted.
///
/// # Errors
///
/// - **400 Bad Request**: `count` is outside `1..=10`
/// - **422 Unprocessable Entity**: `count` is not an integer
pub async fn lotto_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LottoQuery>,
) -> Result<Json<LottoResponse>, AppError> {
    query.validate()?;

    let numbers = state.lotto_service.draw(query.count)?;

    Ok(Json(LottoResponse { numbers }))
}
