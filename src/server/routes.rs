//! Route definitions for the API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Creates the main application router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Dashboard page
        .route("/", get(handlers::index))
        // Health check
        .route("/health", get(handlers::health_check))
        // Dashboard data
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/dashboard/range", get(handlers::get_range))
        .route("/metrics", get(handlers::get_metrics))
        .route("/charts/:chart_id", get(handlers::get_chart))
        .route("/reservations", get(handlers::list_reservations))
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // Add shared state
        .with_state(state)
}
