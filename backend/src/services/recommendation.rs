//! Recommendation service: validation, composition and localization
//!
//! Wraps the shared scoring engine for the HTTP layer: rejects incomplete
//! requests before any scoring runs, collects plausibility warnings,
//! composes the ranked recommendation set and attaches localized crop names.

use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::RecommendationConfig;
use crate::error::{AppError, AppResult};
use shared::{
    build_observation, localized_names, recommend, validate_observation, CropCatalog, Observation,
    ObservationInput, Recommendation,
};

/// Recommendation service over the immutable crop catalog
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<CropCatalog>,
    settings: RecommendationConfig,
}

/// Input for a recommendation request
#[derive(Debug, Default, Deserialize)]
pub struct RecommendInput {
    #[serde(flatten)]
    pub observation: ObservationInput,
    /// How many alternatives to return besides the primary crop
    pub top_n: Option<usize>,
}

/// One recommended crop as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct CropRecommendationView {
    /// Canonical catalog key
    pub crop: String,
    pub name_english: String,
    pub name_hindi: String,
    pub name_bengali: String,
    pub suitability_score: f64,
    pub predicted_yield_kg_per_ha: f64,
    pub sustainability_score: f64,
}

/// Full recommendation response
#[derive(Debug, Serialize)]
pub struct RecommendationReport {
    pub input_parameters: Observation,
    pub primary_crop: CropRecommendationView,
    pub alternative_crops: Vec<CropRecommendationView>,
    pub warnings: Vec<String>,
}

impl RecommendationService {
    /// Create a new RecommendationService instance
    pub fn new(catalog: Arc<CropCatalog>, settings: RecommendationConfig) -> Self {
        Self { catalog, settings }
    }

    /// Validate the input and compose a recommendation report.
    ///
    /// Missing parameters abort before the engine runs; implausible values
    /// only add warnings to an otherwise successful report.
    pub fn recommend(&self, input: RecommendInput) -> AppResult<RecommendationReport> {
        let observation = build_observation(&input.observation)?;
        let warnings = validate_observation(&observation);

        let top_n = input
            .top_n
            .unwrap_or(self.settings.default_alternatives)
            .min(self.settings.max_alternatives);

        let mut rng = self.jitter_rng();
        let set = recommend(&self.catalog, &observation, top_n, &mut rng)
            .ok_or_else(|| AppError::Internal("crop catalog is empty".to_string()))?;

        Ok(RecommendationReport {
            input_parameters: observation,
            primary_crop: view(&set.primary),
            alternative_crops: set.alternatives.iter().map(view).collect(),
            warnings,
        })
    }

    fn jitter_rng(&self) -> ChaCha8Rng {
        match self.settings.jitter_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

fn view(recommendation: &Recommendation) -> CropRecommendationView {
    let names = localized_names(&recommendation.crop);
    CropRecommendationView {
        crop: recommendation.crop.clone(),
        name_english: names.english,
        name_hindi: names.hindi,
        name_bengali: names.bengali,
        suitability_score: round(recommendation.suitability_score, 3),
        predicted_yield_kg_per_ha: round(recommendation.predicted_yield_kg_per_ha, 2),
        sustainability_score: round(recommendation.sustainability_score, 2),
    }
}

fn round(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(jitter_seed: Option<u64>) -> RecommendationService {
        RecommendationService::new(
            Arc::new(CropCatalog::bundled().unwrap()),
            RecommendationConfig {
                default_alternatives: 3,
                max_alternatives: 10,
                jitter_seed,
            },
        )
    }

    fn rice_input() -> RecommendInput {
        RecommendInput {
            observation: ObservationInput {
                nitrogen: Some(100.0),
                phosphorus: Some(50.0),
                potassium: Some(40.0),
                temperature: Some(23.5),
                humidity: Some(85.0),
                ph: Some(6.25),
                rainfall: Some(1750.0),
            },
            top_n: None,
        }
    }

    #[test]
    fn ideal_rice_conditions_recommend_rice() {
        let report = service(Some(7)).recommend(rice_input()).unwrap();
        assert_eq!(report.primary_crop.crop, "rice");
        assert_eq!(report.primary_crop.name_hindi, "चावल");
        assert!(report.primary_crop.suitability_score >= 0.95);
        assert_eq!(report.alternative_crops.len(), 3);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn fixed_seed_makes_reports_reproducible() {
        let a = service(Some(99)).recommend(rice_input()).unwrap();
        let b = service(Some(99)).recommend(rice_input()).unwrap();
        assert_eq!(
            a.primary_crop.predicted_yield_kg_per_ha,
            b.primary_crop.predicted_yield_kg_per_ha
        );
    }

    #[test]
    fn requested_alternatives_are_clamped_to_the_maximum() {
        let mut input = rice_input();
        input.top_n = Some(50);
        let report = service(Some(7)).recommend(input).unwrap();
        assert_eq!(report.alternative_crops.len(), 10);
    }

    #[test]
    fn missing_rainfall_aborts_with_field_name() {
        let mut input = rice_input();
        input.observation.rainfall = None;
        let err = service(Some(7)).recommend(input).unwrap_err();
        match err {
            AppError::MissingParameters(e) => assert_eq!(e.fields, vec!["rainfall"]),
            other => panic!("expected MissingParameters, got {other:?}"),
        }
    }

    #[test]
    fn implausible_humidity_warns_without_failing() {
        let mut input = rice_input();
        input.observation.humidity = Some(150.0);
        let report = service(Some(7)).recommend(input).unwrap();
        assert!(report.warnings.iter().any(|w| w.contains("humidity")));
    }

    #[test]
    fn scores_are_rounded_for_the_wire() {
        let report = service(Some(7)).recommend(rice_input()).unwrap();
        for entry in std::iter::once(&report.primary_crop).chain(&report.alternative_crops) {
            let cents = entry.predicted_yield_kg_per_ha * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6);
        }
    }
}
