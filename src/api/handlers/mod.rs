//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod count;
pub mod fallback;
pub mod health;
pub mod lotto;
pub mod password;

pub use count::count_handler;
pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use health::{health_handler, root_handler};
pub use lotto::lotto_handler;
pub use password::password_handler;
