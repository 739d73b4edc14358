pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::naming::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Path kept from the edge-function deployment the front-end calls.
        .route(
            "/functions/v1/generate-homyo",
            post(handlers::handle_generate),
        )
        .route("/api/v1/homyo/generate", post(handlers::handle_generate))
        .with_state(state)
}
