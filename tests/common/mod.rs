#![allow(dead_code)]

use axum::Router;
use axum::routing::{get, post};
use axum_test::TestServer;
use std::sync::Arc;
use ws_utils::api::handlers::{
    count_handler, health_handler, lotto_handler, password_handler, root_handler,
};
use ws_utils::application::services::LottoService;
use ws_utils::state::AppState;

/// Builds state whose lotto draws are reproducible.
pub fn create_test_state(seed: u64) -> AppState {
    AppState::new(Arc::new(LottoService::from_seed(Some(seed))))
}

/// Builds state drawing from the per-thread RNG.
pub fn create_random_state() -> AppState {
    AppState::new(Arc::new(LottoService::from_seed(None)))
}

/// Test server with every handler routed, without middleware.
pub fn create_test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/lotto", get(lotto_handler))
        .route("/password", post(password_handler))
        .route("/count", post(count_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}
