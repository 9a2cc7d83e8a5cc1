//! Route definitions for the Crop Recommendation Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Recommendation scoring
        .nest("/recommendations", recommendation_routes())
        // Crop catalog
        .nest("/crops", crop_routes())
        // Usage analytics
        .nest("/usage", usage_routes())
}

/// Recommendation routes
fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/", post(handlers::recommend_crops))
}

/// Crop catalog routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crops))
        .route("/:crop_name", get(handlers::get_crop))
}

/// Usage analytics routes
fn usage_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::get_usage_stats))
}
