//! WebAssembly module for the Crop Recommendation Platform
//!
//! Provides client-side computation for:
//! - Suitability scoring against the bundled catalog
//! - Pre-jitter yield multipliers and sustainability scores
//! - Offline input validation
//! - Localized crop names
//!
//! Only the deterministic parts of the engine are exposed here; the jittered
//! yield estimate needs the server's RNG and stays server-side.

use wasm_bindgen::prelude::*;

use shared::{
    build_observation, crop_display_name, rank_crops, suitability_score, sustainability_score,
    validate_observation, yield_multiplier, CropCatalog, CropProfile, Language, Observation,
    ObservationInput,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn catalog() -> Result<CropCatalog, JsValue> {
    CropCatalog::bundled().map_err(|e| JsValue::from_str(&format!("Catalog error: {}", e)))
}

fn parse_observation(observation_json: &str) -> Result<Observation, JsValue> {
    let input: ObservationInput = serde_json::from_str(observation_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid observation JSON: {}", e)))?;
    build_observation(&input).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn find_crop(catalog: &CropCatalog, crop: &str) -> Result<CropProfile, JsValue> {
    catalog
        .get(crop)
        .cloned()
        .ok_or_else(|| JsValue::from_str(&format!("Unknown crop: {}", crop)))
}

/// Suitability score of one crop for an observation, in [0, 1]
#[wasm_bindgen]
pub fn crop_suitability(crop: &str, observation_json: &str) -> Result<f64, JsValue> {
    let catalog = catalog()?;
    let profile = find_crop(&catalog, crop)?;
    let observation = parse_observation(observation_json)?;
    Ok(suitability_score(&profile, &observation))
}

/// Deterministic pre-jitter yield multiplier for one crop
#[wasm_bindgen]
pub fn crop_yield_multiplier(crop: &str, observation_json: &str) -> Result<f64, JsValue> {
    let catalog = catalog()?;
    let profile = find_crop(&catalog, crop)?;
    let observation = parse_observation(observation_json)?;
    Ok(yield_multiplier(&profile, &observation))
}

/// Sustainability score of one crop, in [1, 10]
#[wasm_bindgen]
pub fn crop_sustainability(crop: &str, observation_json: &str) -> Result<f64, JsValue> {
    let catalog = catalog()?;
    let profile = find_crop(&catalog, crop)?;
    let observation = parse_observation(observation_json)?;
    Ok(sustainability_score(&profile, &observation))
}

/// Rank the whole catalog for an observation; returns a JSON array of
/// `{crop, score}` sorted best-first
#[wasm_bindgen]
pub fn rank_catalog(observation_json: &str) -> Result<String, JsValue> {
    let catalog = catalog()?;
    let observation = parse_observation(observation_json)?;
    let ranked = rank_crops(&catalog, &observation);
    serde_json::to_string(&ranked).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate an observation offline; returns a JSON array of warning strings
#[wasm_bindgen]
pub fn validate_inputs(observation_json: &str) -> Result<String, JsValue> {
    let observation = parse_observation(observation_json)?;
    let warnings = validate_observation(&observation);
    serde_json::to_string(&warnings).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Display name of a crop in "en", "hi" or "bn", falling back to the key
#[wasm_bindgen]
pub fn localized_crop_name(crop: &str, language_code: &str) -> String {
    let language = match language_code {
        "hi" => Language::Hindi,
        "bn" => Language::Bengali,
        _ => Language::English,
    };
    crop_display_name(crop, language).to_string()
}

/// JSON array of every supported crop's canonical key
#[wasm_bindgen]
pub fn supported_crops() -> Result<String, JsValue> {
    let catalog = catalog()?;
    let names: Vec<&str> = catalog.names().collect();
    serde_json::to_string(&names).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RICE_MIDPOINT: &str = r#"{"N":100,"P":50,"K":40,"temperature":23.5,"humidity":85,"ph":6.25,"rainfall":1750}"#;

    #[test]
    fn suitability_matches_engine() {
        let score = crop_suitability("rice", RICE_MIDPOINT).unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn ranking_returns_all_crops() {
        let json = rank_catalog(RICE_MIDPOINT).unwrap();
        let ranked: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(ranked.len(), 24);
        assert_eq!(ranked[0]["crop"], "rice");
    }

    #[test]
    fn localized_name_falls_back() {
        assert_eq!(localized_crop_name("rice", "hi"), "चावल");
        assert_eq!(localized_crop_name("quinoa", "bn"), "quinoa");
    }
}
