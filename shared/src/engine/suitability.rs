//! Suitability scoring
//!
//! Edge-distance policy: a parameter inside its optimal band awards 1.0;
//! outside, the award falls off linearly with the distance from the nearest
//! band edge, normalized by the band width and clamped so that a full band
//! width away scores zero. The final score is the mean award over the seven
//! parameters.
//!
//! A midpoint-distance formulation would rank crops differently near band
//! edges; this module standardizes on edge distance everywhere (see
//! DESIGN.md for the rationale).

use crate::models::{ClimateComfort, CropProfile, Observation, ParameterRange};
use crate::types::Parameter;

/// Parameters scored on the standard edge-distance rule even when a crop
/// carries a tiered climate override.
const STANDARD_PARAMETERS: [Parameter; 5] = [
    Parameter::Nitrogen,
    Parameter::Phosphorus,
    Parameter::Potassium,
    Parameter::Ph,
    Parameter::Rainfall,
];

/// Score how well an observation matches a crop's optimal bands.
///
/// Deterministic, and bounded to [0, 1]; 1.0 means every parameter sits
/// inside its band.
pub fn suitability_score(crop: &CropProfile, observation: &Observation) -> f64 {
    let score = match &crop.comfort {
        Some(comfort) => tiered_total(crop, comfort, observation),
        None => {
            let total: f64 = Parameter::ALL
                .iter()
                .map(|&p| band_award(crop.range(p), observation.get(p)))
                .sum();
            total / Parameter::ALL.len() as f64
        }
    };
    score.clamp(0.0, 1.0)
}

/// Award for one parameter under the standard rule.
fn band_award(range: &ParameterRange, value: f64) -> f64 {
    if range.contains(value) {
        return 1.0;
    }
    let penalty = (range.distance_to(value) / range.width()).min(1.0);
    (1.0 - penalty).max(0.0)
}

/// Total for crops with a tiered climate response: temperature and humidity
/// climb the ideal/tolerable ladder, everything else scores normally, and
/// the denominator grows by the bonus weight so a perfect match still
/// normalizes to 1.0.
fn tiered_total(crop: &CropProfile, comfort: &ClimateComfort, observation: &Observation) -> f64 {
    let bonus_per_parameter = comfort.bonus_weight / 2.0;
    let mut total = tier_award(
        &comfort.ideal_temperature,
        &comfort.tolerable_temperature,
        observation.temperature,
        bonus_per_parameter,
    );
    total += tier_award(
        &comfort.ideal_humidity,
        &comfort.tolerable_humidity,
        observation.humidity,
        bonus_per_parameter,
    );
    total += STANDARD_PARAMETERS
        .iter()
        .map(|&p| band_award(crop.range(p), observation.get(p)))
        .sum::<f64>();
    total / (Parameter::ALL.len() as f64 + comfort.bonus_weight)
}

/// Award for one tiered parameter: full credit plus bonus inside the ideal
/// band, full credit inside the tolerable band, otherwise a penalty growing
/// with the distance from the ideal band's midpoint.
fn tier_award(ideal: &ParameterRange, tolerable: &ParameterRange, value: f64, bonus: f64) -> f64 {
    if ideal.contains(value) {
        1.0 + bonus
    } else if tolerable.contains(value) {
        1.0
    } else {
        let center = ideal.midpoint();
        (1.0 - (value - center).abs() / center.max(1.0)).max(0.0)
    }
}
