//! Lotto number generation.

use crate::utils::error::UtilError;
use crate::utils::random::NumberSource;

/// Numbers drawn when the caller does not say otherwise.
pub const DEFAULT_COUNT: i64 = 6;

/// Smallest number in the default range.
pub const DEFAULT_MIN: i64 = 1;

/// Largest number in the default range.
pub const DEFAULT_MAX: i64 = 45;

/// Draws `count` distinct numbers from the inclusive range
/// `[min_value, max_value]`.
///
/// Sampling is uniform and without replacement: every subset of size `count`
/// is equally likely. The result keeps the order produced by the source and
/// is not sorted.
///
/// # Errors
///
/// Returns [`UtilError::InvalidArgument`] if:
/// - `count` is less than 1
/// - `count` exceeds the number of integers in the range (an inverted range
///   holds none)
///
/// # Examples
///
/// ```
/// use ws_utils::utils::generate_lotto;
/// use ws_utils::utils::random::SeededSource;
///
/// let numbers = generate_lotto(&SeededSource::new(1), 6, 1, 45).unwrap();
/// assert_eq!(numbers.len(), 6);
/// assert!(numbers.iter().all(|n| (1..=45).contains(n)));
/// ```
pub fn generate_lotto(
    source: &dyn NumberSource,
    count: i64,
    min_value: i64,
    max_value: i64,
) -> Result<Vec<i64>, UtilError> {
    if count < 1 {
        return Err(UtilError::invalid_argument("count must be >= 1"));
    }

    let range_size = i128::from(max_value) - i128::from(min_value) + 1;
    if i128::from(count) > range_size {
        return Err(UtilError::invalid_argument("count is too large for range"));
    }

    let length = usize::try_from(range_size)
        .map_err(|_| UtilError::invalid_argument("range is too large"))?;
    let amount = usize::try_from(count)
        .map_err(|_| UtilError::invalid_argument("count is too large for range"))?;

    let numbers = source
        .sample_indices(length, amount)
        .into_iter()
        .map(|offset| (i128::from(min_value) + offset as i128) as i64)
        .collect();

    Ok(numbers)
}
