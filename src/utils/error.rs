//! Error type shared by the utility functions.

/// Precondition failure raised by the utility library.
///
/// The library fails on the first violated precondition and performs no
/// partial work. The HTTP layer turns this into a `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UtilError {
    #[error("{0}")]
    InvalidArgument(String),
}

impl UtilError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
