//! HTTP handlers for recommendation endpoints

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::recommendation::{RecommendInput, RecommendationReport};
use crate::services::RecommendationService;
use crate::AppState;

/// Score the catalog against the submitted observation and return the best
/// crop with alternatives
pub async fn recommend_crops(
    State(state): State<AppState>,
    Json(input): Json<RecommendInput>,
) -> AppResult<Json<RecommendationReport>> {
    let service = RecommendationService::new(
        state.catalog.clone(),
        state.config.recommendation.clone(),
    );
    let report = service.recommend(input)?;

    tracing::info!(
        "Recommended {} (suitability {})",
        report.primary_crop.crop,
        report.primary_crop.suitability_score
    );
    state
        .usage
        .record("recommendations", Some(&report.primary_crop.crop))
        .await;

    Ok(Json(report))
}
