//! Utility library backing the HTTP service and the `wsctl` CLI.
//!
//! All functions are pure apart from [`lotto::generate_lotto`], which draws
//! from an explicitly injected [`random::NumberSource`].
//!
//! - [`lotto`] - Unique random number sampling
//! - [`password`] - Website-derived password heuristic
//! - [`word_count`] - Non-overlapping substring counting
//! - [`random`] - Randomness sources
//! - [`error`] - [`UtilError`]

pub mod error;
pub mod lotto;
pub mod password;
pub mod random;
pub mod word_count;

pub use error::UtilError;
pub use lotto::generate_lotto;
pub use password::generate_password;
pub use word_count::count_word;
