use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/behaviors", get(handlers::get_behaviors))
        .route("/api/log", post(handlers::log_behavior))
        .route("/api/log/:subject", get(handlers::get_log))
        .route("/api/summary/:subject", get(handlers::get_summary))
        .route("/api/reset", post(handlers::reset))
        .route("/api/export/:subject", get(handlers::export_csv))
        .with_state(state)
}
