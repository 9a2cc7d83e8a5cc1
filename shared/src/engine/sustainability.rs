//! Sustainability scoring
//!
//! A synthetic [1, 10] proxy for resource efficiency: thriftier water and
//! nitrogen use, near-neutral pH and a climate the crop is comfortable in
//! all push the score up. Sub-scores are clamped to [1, 10] independently
//! before the weighted sum, which is clamped again.

use crate::models::{CropProfile, Observation, ParameterRange};

const WATER_WEIGHT: f64 = 0.40;
const FERTILIZER_WEIGHT: f64 = 0.25;
const PH_WEIGHT: f64 = 0.20;
const CLIMATE_WEIGHT: f64 = 0.15;

/// Comfort bands assumed for crops without an explicit climate override.
const DEFAULT_IDEAL_TEMPERATURE: ParameterRange = ParameterRange::new(20.0, 30.0);
const DEFAULT_IDEAL_HUMIDITY: ParameterRange = ParameterRange::new(60.0, 80.0);
const DEFAULT_TOLERABLE_TEMPERATURE: ParameterRange = ParameterRange::new(15.0, 35.0);
const DEFAULT_TOLERABLE_HUMIDITY: ParameterRange = ParameterRange::new(40.0, 90.0);

/// Sustainability score in [1, 10].
pub fn sustainability_score(crop: &CropProfile, observation: &Observation) -> f64 {
    let water = subscore(10.0 - crop.water_need / 250.0);
    let fertilizer = subscore(10.0 - observation.nitrogen / 15.0);
    let ph = subscore(10.0 - (observation.ph - 7.0).abs() * 1.5);
    let climate = climate_score(crop, observation);

    let total = water * WATER_WEIGHT
        + fertilizer * FERTILIZER_WEIGHT
        + ph * PH_WEIGHT
        + climate * CLIMATE_WEIGHT;
    total.clamp(1.0, 10.0)
}

fn subscore(value: f64) -> f64 {
    value.clamp(1.0, 10.0)
}

/// Step function over the crop's comfort bands: 9 inside the ideal climate,
/// 7 inside the tolerable one, 5 otherwise.
fn climate_score(crop: &CropProfile, observation: &Observation) -> f64 {
    let (ideal_t, tolerable_t, ideal_h, tolerable_h) = match &crop.comfort {
        Some(c) => (
            &c.ideal_temperature,
            &c.tolerable_temperature,
            &c.ideal_humidity,
            &c.tolerable_humidity,
        ),
        None => (
            &DEFAULT_IDEAL_TEMPERATURE,
            &DEFAULT_TOLERABLE_TEMPERATURE,
            &DEFAULT_IDEAL_HUMIDITY,
            &DEFAULT_TOLERABLE_HUMIDITY,
        ),
    };

    if ideal_t.contains(observation.temperature) && ideal_h.contains(observation.humidity) {
        9.0
    } else if tolerable_t.contains(observation.temperature)
        && tolerable_h.contains(observation.humidity)
    {
        7.0
    } else {
        5.0
    }
}
