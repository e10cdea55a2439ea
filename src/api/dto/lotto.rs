//! DTOs for the lotto endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::lotto::DEFAULT_COUNT;

/// Query parameters of `GET /lotto`.
///
/// The `1..=10` bound is service policy and is narrower than what the
/// utility library accepts. Integers beyond `i64` saturate so they fail the
/// range check (400) instead of parsing (422).
///
/// A repeated `count` parameter is rejected as a duplicate field rather than
/// resolved to its last value.
#[derive(Debug, Deserialize, Validate)]
pub struct LottoQuery {
    #[serde(default = "default_count", deserialize_with = "saturating_i64::deserialize")]
    #[validate(range(min = 1, max = 10, message = "count must be between 1 and 10"))]
    pub count: i64,
}

fn default_count() -> i64 {
    DEFAULT_COUNT
}

/// Drawn numbers, in sampling order.
#[derive(Debug, Serialize)]
pub struct LottoResponse {
    pub numbers: Vec<i64>,
}

/// Parses a decimal integer, clamping overflow to `i64::MIN` / `i64::MAX`.
mod saturating_i64 {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use std::num::IntErrorKind;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.parse::<i64>() {
            Ok(value) => Ok(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(D::Error::custom(format!(
                    "count: invalid integer '{}': {}",
                    raw, e
                ))),
            },
        }
    }
}
