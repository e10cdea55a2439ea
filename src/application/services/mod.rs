//! Business logic services for the application layer.

pub mod lotto_service;

pub use lotto_service::LottoService;
