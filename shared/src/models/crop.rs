//! Crop profile models
//!
//! A [`CropProfile`] is the static description of one supported crop: the
//! optimal band for each of the seven input parameters plus the baseline
//! constants the yield and sustainability models run on. Profiles are
//! immutable configuration; they are assembled once into a
//! [`crate::catalog::CropCatalog`] at process start.

use serde::{Deserialize, Serialize};

use crate::types::Parameter;

/// Inclusive `(min, max)` band for one input parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Distance from `value` to the nearest band edge, 0 inside the band.
    pub fn distance_to(&self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }

    /// Band width, floored at 1 so single-point bands still normalize.
    pub fn width(&self) -> f64 {
        (self.max - self.min).max(1.0)
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// The full set of optimal bands for one crop, one per parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParameterBands {
    pub nitrogen: ParameterRange,
    pub phosphorus: ParameterRange,
    pub potassium: ParameterRange,
    pub temperature: ParameterRange,
    pub humidity: ParameterRange,
    pub ph: ParameterRange,
    pub rainfall: ParameterRange,
}

impl ParameterBands {
    pub fn get(&self, parameter: Parameter) -> &ParameterRange {
        match parameter {
            Parameter::Nitrogen => &self.nitrogen,
            Parameter::Phosphorus => &self.phosphorus,
            Parameter::Potassium => &self.potassium,
            Parameter::Temperature => &self.temperature,
            Parameter::Humidity => &self.humidity,
            Parameter::Ph => &self.ph,
            Parameter::Rainfall => &self.rainfall,
        }
    }
}

/// Tiered climate comfort bands for crops whose temperature/humidity
/// response is too sharp for a single optimal band.
///
/// A crop carrying this override scores temperature and humidity on an
/// ideal/tolerable ladder (with `bonus_weight` extra credit available for
/// landing in the ideal band) instead of the standard edge-distance rule,
/// and its yield and climate sub-scores use the same bands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClimateComfort {
    pub ideal_temperature: ParameterRange,
    pub tolerable_temperature: ParameterRange,
    pub ideal_humidity: ParameterRange,
    pub tolerable_humidity: ParameterRange,
    /// Extra suitability weight granted across the two tiered parameters.
    pub bonus_weight: f64,
}

/// Crop category, as exposed by the catalog listing endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CropCategory {
    Cereal,
    Pulse,
    CashCrop,
    Fruit,
    Vegetable,
}

impl CropCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropCategory::Cereal => "cereal",
            CropCategory::Pulse => "pulse",
            CropCategory::CashCrop => "cash_crop",
            CropCategory::Fruit => "fruit",
            CropCategory::Vegetable => "vegetable",
        }
    }
}

/// Static description of one supported crop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropProfile {
    /// Canonical lower-case key, e.g. "rice".
    pub name: String,
    pub category: CropCategory,
    /// Optimal band per input parameter.
    pub ranges: ParameterBands,
    /// Reference yield under ideal conditions, kg/ha.
    pub base_yield: f64,
    /// Reference annual rainfall requirement, mm.
    pub water_need: f64,
    /// Nutrient-to-yield conversion efficiency, in (0, 1].
    pub fertilizer_efficiency: f64,
    /// Tiered climate response, for crops that need one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comfort: Option<ClimateComfort>,
}

impl CropProfile {
    pub fn range(&self, parameter: Parameter) -> &ParameterRange {
        self.ranges.get(parameter)
    }
}
