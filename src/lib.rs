//! # ws-utils
//!
//! A small web service exposing three utility functions built with Axum:
//! lotto number sampling, a website-derived password heuristic and
//! non-overlapping word counting.
//!
//! ## Architecture
//!
//! - **Utility Layer** ([`utils`]) - Pure functions and randomness sources
//! - **Application Layer** ([`application`]) - Services binding utilities to runtime resources
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: reproducible lotto draws
//! export LOTTO_SEED=42
//!
//! cargo run
//! curl 'http://localhost:8000/lotto?count=6'
//! ```
//!
//! The same utilities are available offline through the `wsctl` binary.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LottoService;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::random::{NumberSource, SeededSource, ThreadRngSource};
    pub use crate::utils::{UtilError, count_word, generate_lotto, generate_password};
}
