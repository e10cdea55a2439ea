//! Shared application state passed to handlers.

use std::sync::Arc;

use crate::application::services::LottoService;

/// State cloned into every request handler.
///
/// Holds no mutable data apart from what the lotto service's number source
/// guards internally.
#[derive(Clone)]
pub struct AppState {
    pub lotto_service: Arc<LottoService>,
}

impl AppState {
    pub fn new(lotto_service: Arc<LottoService>) -> Self {
        Self { lotto_service }
    }
}
