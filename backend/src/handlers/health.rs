//! Health check and service info handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub status: String,
    pub endpoints: Vec<String>,
    pub crops_supported: usize,
    pub languages: Vec<String>,
}

/// Service banner, served at the root path
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "Crop Recommendation API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "operational".to_string(),
        endpoints: vec![
            "/health".to_string(),
            "/api/v1/recommendations".to_string(),
            "/api/v1/crops".to_string(),
            "/api/v1/usage".to_string(),
        ],
        crops_supported: state.catalog.len(),
        languages: vec![
            "english".to_string(),
            "hindi".to_string(),
            "bengali".to_string(),
        ],
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub crops_supported: usize,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        crops_supported: state.catalog.len(),
    })
}
