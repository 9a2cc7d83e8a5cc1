//! Recommendation composer
//!
//! Runs the suitability scorer over the whole catalog, picks the best crop
//! (first-seen wins on ties), and enriches the top results with yield and
//! sustainability metrics computed independently per crop.

use rand::Rng;

use crate::catalog::CropCatalog;
use crate::models::{CropProfile, Observation, Recommendation, RecommendationSet, SuitabilityResult};

use super::suitability::suitability_score;
use super::sustainability::sustainability_score;
use super::yield_model::estimate_yield;

/// Score every crop in the catalog, sorted descending by score.
///
/// The sort is stable, so crops with equal scores keep catalog order.
pub fn rank_crops(catalog: &CropCatalog, observation: &Observation) -> Vec<SuitabilityResult> {
    scored(catalog, observation)
        .into_iter()
        .map(|(crop, score)| SuitabilityResult {
            crop: crop.name.clone(),
            score,
        })
        .collect()
}

/// Compose the primary recommendation and up to `top_n` alternatives.
///
/// Returns `None` only for an empty catalog; a single-crop catalog degrades
/// to a primary with no alternatives.
pub fn recommend<R: Rng + ?Sized>(
    catalog: &CropCatalog,
    observation: &Observation,
    top_n: usize,
    rng: &mut R,
) -> Option<RecommendationSet> {
    let mut entries = scored(catalog, observation)
        .into_iter()
        .map(|(crop, score)| enrich(crop, score, observation, rng));

    let primary = entries.next()?;
    let alternatives = entries.take(top_n).collect();
    Some(RecommendationSet {
        primary,
        alternatives,
    })
}

fn scored<'a>(
    catalog: &'a CropCatalog,
    observation: &Observation,
) -> Vec<(&'a CropProfile, f64)> {
    let mut results: Vec<(&CropProfile, f64)> = catalog
        .iter()
        .map(|crop| (crop, suitability_score(crop, observation)))
        .collect();
    results.sort_by(|a, b| b.1.total_cmp(&a.1));
    results
}

fn enrich<R: Rng + ?Sized>(
    crop: &CropProfile,
    score: f64,
    observation: &Observation,
    rng: &mut R,
) -> Recommendation {
    Recommendation {
        crop: crop.name.clone(),
        suitability_score: score,
        predicted_yield_kg_per_ha: estimate_yield(crop, observation, rng),
        sustainability_score: sustainability_score(crop, observation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CropCatalog;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn catalog() -> CropCatalog {
        CropCatalog::bundled().unwrap()
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2025)
    }

    #[test]
    fn rice_midpoint_conditions_pick_rice() {
        let catalog = catalog();
        let observation = Observation {
            nitrogen: 100.0,
            phosphorus: 50.0,
            potassium: 40.0,
            temperature: 23.5,
            humidity: 85.0,
            ph: 6.25,
            rainfall: 1750.0,
        };
        let set = recommend(&catalog, &observation, 3, &mut rng()).unwrap();
        assert_eq!(set.primary.crop, "rice");
        assert!(set.primary.suitability_score >= 0.95);
    }

    #[test]
    fn low_rainfall_rules_rice_out_despite_good_soil() {
        let catalog = catalog();
        // Good rice soil chemistry, but 203mm of rain against a 1500mm band.
        let observation = Observation {
            nitrogen: 90.0,
            phosphorus: 42.0,
            potassium: 43.0,
            temperature: 21.0,
            humidity: 82.0,
            ph: 6.5,
            rainfall: 203.0,
        };
        let set = recommend(&catalog, &observation, 5, &mut rng()).unwrap();
        assert_ne!(set.primary.crop, "rice");
        let rice_score = rank_crops(&catalog, &observation)
            .into_iter()
            .find(|r| r.crop == "rice")
            .unwrap()
            .score;
        assert!(set.primary.suitability_score > rice_score);
    }

    #[test]
    fn ranking_is_strictly_ordered() {
        let catalog = catalog();
        let observation = Observation {
            nitrogen: 60.0,
            phosphorus: 40.0,
            potassium: 40.0,
            temperature: 22.0,
            humidity: 65.0,
            ph: 6.8,
            rainfall: 700.0,
        };
        let ranked = rank_crops(&catalog, &observation);
        assert_eq!(ranked.len(), catalog.len());
        for window in ranked.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn alternatives_are_capped_and_sorted() {
        let catalog = catalog();
        let observation = Observation {
            nitrogen: 60.0,
            phosphorus: 40.0,
            potassium: 40.0,
            temperature: 22.0,
            humidity: 65.0,
            ph: 6.8,
            rainfall: 700.0,
        };
        let set = recommend(&catalog, &observation, 3, &mut rng()).unwrap();
        assert_eq!(set.alternatives.len(), 3);
        assert!(set.primary.suitability_score >= set.alternatives[0].suitability_score);
        for window in set.alternatives.windows(2) {
            assert!(window[0].suitability_score >= window[1].suitability_score);
        }
    }

    #[test]
    fn metrics_are_computed_per_crop() {
        let catalog = catalog();
        let observation = Observation {
            nitrogen: 60.0,
            phosphorus: 40.0,
            potassium: 40.0,
            temperature: 22.0,
            humidity: 65.0,
            ph: 6.8,
            rainfall: 700.0,
        };
        let set = recommend(&catalog, &observation, 5, &mut rng()).unwrap();
        for entry in std::iter::once(&set.primary).chain(&set.alternatives) {
            assert!(entry.predicted_yield_kg_per_ha >= 100.0);
            assert!((1.0..=10.0).contains(&entry.sustainability_score));
        }
        // Yields scale with each crop's own baseline, not the primary's.
        let yields: Vec<f64> = set
            .alternatives
            .iter()
            .map(|a| a.predicted_yield_kg_per_ha)
            .collect();
        assert!(yields.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn empty_catalog_degrades_to_none() {
        let catalog = CropCatalog::new(Vec::new()).unwrap();
        let observation = Observation {
            nitrogen: 60.0,
            phosphorus: 40.0,
            potassium: 40.0,
            temperature: 22.0,
            humidity: 65.0,
            ph: 6.8,
            rainfall: 700.0,
        };
        assert!(recommend(&catalog, &observation, 3, &mut rng()).is_none());
    }

    #[test]
    fn single_crop_catalog_has_no_alternatives() {
        let full = catalog();
        let rice = full.get("rice").unwrap().clone();
        let catalog = CropCatalog::new(vec![rice]).unwrap();
        let observation = Observation {
            nitrogen: 100.0,
            phosphorus: 50.0,
            potassium: 40.0,
            temperature: 23.5,
            humidity: 85.0,
            ph: 6.25,
            rainfall: 1750.0,
        };
        let set = recommend(&catalog, &observation, 3, &mut rng()).unwrap();
        assert_eq!(set.primary.crop, "rice");
        assert!(set.alternatives.is_empty());
    }

    #[test]
    fn top_n_zero_returns_primary_only() {
        let catalog = catalog();
        let observation = Observation {
            nitrogen: 100.0,
            phosphorus: 50.0,
            potassium: 40.0,
            temperature: 23.5,
            humidity: 85.0,
            ph: 6.25,
            rainfall: 1750.0,
        };
        let set = recommend(&catalog, &observation, 0, &mut rng()).unwrap();
        assert!(set.alternatives.is_empty());
    }
}
