//! Randomness sources for sampling.
//!
//! The lotto generator never reaches for an ambient RNG. Callers pass a
//! [`NumberSource`], so production code can use a per-thread RNG while tests
//! and reproducible deployments use a seeded one.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use std::sync::{Mutex, PoisonError};

/// Source of uniformly distributed, distinct indices.
#[cfg_attr(test, mockall::automock)]
pub trait NumberSource: Send + Sync {
    /// Picks `amount` distinct indices from `0..length`, uniformly and
    /// without replacement, in sampling order.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `amount > length`; callers must check.
    fn sample_indices(&self, length: usize, amount: usize) -> Vec<usize>;
}

/// Draws from the thread-local, OS-seeded RNG.
///
/// Each handler thread has its own generator, so concurrent requests need
/// no coordination.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl NumberSource for ThreadRngSource {
    fn sample_indices(&self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut rand::rng(), length, amount).into_vec()
    }
}

/// Deterministic source backed by a seeded [`StdRng`].
///
/// The generator sits behind a mutex that is held for a single draw only.
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl NumberSource for SeededSource {
    fn sample_indices(&self, length: usize, amount: usize) -> Vec<usize> {
        // A poisoned lock still holds a valid generator state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        index::sample(&mut *rng, length, amount).into_vec()
    }
}
