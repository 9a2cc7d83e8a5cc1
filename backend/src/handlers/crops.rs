//! HTTP handlers for catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::AppState;
use shared::{localized_names, CropProfile, LocalizedCropName};

/// One catalog entry in the listing
#[derive(Serialize)]
pub struct CropSummary {
    pub name: String,
    #[serde(flatten)]
    pub names: LocalizedCropName,
    pub category: String,
}

#[derive(Serialize)]
pub struct CropListResponse {
    pub total_crops: usize,
    pub crops: Vec<CropSummary>,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
}

/// List all supported crops with localized names
pub async fn list_crops(State(state): State<AppState>) -> Json<CropListResponse> {
    let crops: Vec<CropSummary> = state
        .catalog
        .iter()
        .map(|crop| CropSummary {
            name: crop.name.clone(),
            names: localized_names(&crop.name),
            category: crop.category.as_str().to_string(),
        })
        .collect();

    state.usage.record("crops", None).await;

    Json(CropListResponse {
        total_crops: crops.len(),
        crops,
        categories: vec![
            "cereal".to_string(),
            "pulse".to_string(),
            "cash_crop".to_string(),
            "fruit".to_string(),
            "vegetable".to_string(),
        ],
        languages: vec![
            "english".to_string(),
            "hindi".to_string(),
            "bengali".to_string(),
        ],
    })
}

/// One crop's full profile
#[derive(Serialize)]
pub struct CropDetail {
    #[serde(flatten)]
    pub profile: CropProfile,
    pub names: LocalizedCropName,
}

/// Get a single crop profile by its canonical key
pub async fn get_crop(
    State(state): State<AppState>,
    Path(crop_name): Path<String>,
) -> AppResult<Json<CropDetail>> {
    let profile = state
        .catalog
        .get(&crop_name)
        .cloned()
        .ok_or_else(|| AppError::CropNotFound(crop_name.clone()))?;

    Ok(Json(CropDetail {
        names: localized_names(&profile.name),
        profile,
    }))
}
