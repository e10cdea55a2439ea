//! Lotto drawing service.

use std::sync::Arc;

use crate::error::AppError;
use crate::utils::lotto::{DEFAULT_MAX, DEFAULT_MIN, generate_lotto};
use crate::utils::random::{NumberSource, SeededSource, ThreadRngSource};

/// Draws lotto numbers from a shared [`NumberSource`].
///
/// The range is fixed at construction; request-level policy (such as the
/// maximum count accepted over HTTP) is enforced by the API layer.
pub struct LottoService {
    source: Arc<dyn NumberSource>,
    min_value: i64,
    max_value: i64,
}

impl LottoService {
    /// Creates a service drawing from `source` over the default `1..=45` range.
    pub fn new(source: Arc<dyn NumberSource>) -> Self {
        Self::with_range(source, DEFAULT_MIN, DEFAULT_MAX)
    }

    /// Creates a service drawing from `source` over `[min_value, max_value]`.
    pub fn with_range(source: Arc<dyn NumberSource>, min_value: i64, max_value: i64) -> Self {
        Self {
            source,
            min_value,
            max_value,
        }
    }

    /// Picks the source from an optional seed.
    ///
    /// `Some(seed)` yields a reproducible [`SeededSource`], `None` the
    /// per-thread RNG.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let source: Arc<dyn NumberSource> = match seed {
            Some(seed) => Arc::new(SeededSource::new(seed)),
            None => Arc::new(ThreadRngSource),
        };
        Self::new(source)
    }

    /// Draws `count` distinct numbers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the utility library rejects `count`.
    pub fn draw(&self, count: i64) -> Result<Vec<i64>, AppError> {
        let numbers = generate_lotto(self.source.as_ref(), count, self.min_value, self.max_value)?;

        tracing::debug!(count, ?numbers, "Lotto numbers drawn");

        Ok(numbers)
    }

    /// Inclusive range this service draws from.
    pub fn range(&self) -> (i64, i64) {
        (self.min_value, self.max_value)
    }
}
