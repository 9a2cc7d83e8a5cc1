//! HTTP handlers for usage analytics endpoints

use axum::{extract::State, Json};

use crate::services::usage::UsageStats;
use crate::AppState;

/// Aggregated usage statistics
pub async fn get_usage_stats(State(state): State<AppState>) -> Json<UsageStats> {
    Json(state.usage.stats().await)
}
