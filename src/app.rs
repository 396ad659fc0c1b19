use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/countdown", get(handlers::get_countdown))
        .route("/api/holidays", get(handlers::get_holidays))
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
}
