//! Application layer services.
//!
//! Services bind the pure utility library to the runtime resources it needs
//! (currently only a randomness source) and give handlers a small API.
//!
//! # Available Services
//!
//! - [`services::lotto_service::LottoService`] - Lotto draws over the default range

pub mod services;
