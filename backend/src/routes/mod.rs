//! Route definitions for the TanAI advisory server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Shade catalogue
        .nest("/shades", shade_routes())
        // Exposure advisories
        .nest("/advisory", advisory_routes())
        // Tanning plans
        .route("/plans", post(handlers::create_plan))
}

/// Shade catalogue routes
fn shade_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_shades))
        .route("/:shade/targets", get(handlers::list_target_shades))
}

/// Advisory routes
fn advisory_routes() -> Router<AppState> {
    Router::new()
        .route("/evaluate", post(handlers::evaluate_reading))
        .route("/current", get(handlers::get_current_advisory))
        .route("/forecast", get(handlers::get_forecast_advisory))
}
