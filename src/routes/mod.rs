// src/routes/mod.rs
pub mod plan;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use plan::{attractions_handler, get_metrics_handler, plan_handler};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/plan", post(plan_handler))
        .route("/api/attractions", post(attractions_handler))
        .route("/admin/metrics", get(get_metrics_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
