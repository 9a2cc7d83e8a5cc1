//! Recommendation result models

use serde::{Deserialize, Serialize};

/// Suitability of one crop for one observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuitabilityResult {
    /// Canonical crop key.
    pub crop: String,
    /// Score in [0, 1]; 1.0 means every parameter sits in its optimal band.
    pub score: f64,
}

/// One scored crop, enriched with the synthetic yield and sustainability
/// metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub crop: String,
    pub suitability_score: f64,
    pub predicted_yield_kg_per_ha: f64,
    /// Resource-efficiency proxy in [1, 10].
    pub sustainability_score: f64,
}

/// Output of the recommendation composer: the best crop plus ranked
/// alternatives, each carrying independently computed metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub primary: Recommendation,
    pub alternatives: Vec<Recommendation>,
}
