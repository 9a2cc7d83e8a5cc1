//! Input observation model

use serde::{Deserialize, Serialize};

use crate::types::Parameter;

/// One soil/climate measurement set, as supplied by the caller.
///
/// All seven values are required at this boundary; requests with missing
/// fields must be rejected before an `Observation` is ever constructed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    /// Nitrogen content, kg/ha.
    #[serde(rename = "N")]
    pub nitrogen: f64,
    /// Phosphorus content, kg/ha.
    #[serde(rename = "P")]
    pub phosphorus: f64,
    /// Potassium content, kg/ha.
    #[serde(rename = "K")]
    pub potassium: f64,
    /// Average temperature, °C.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Soil pH.
    pub ph: f64,
    /// Annual rainfall, mm.
    pub rainfall: f64,
}

impl Observation {
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Nitrogen => self.nitrogen,
            Parameter::Phosphorus => self.phosphorus,
            Parameter::Potassium => self.potassium,
            Parameter::Temperature => self.temperature,
            Parameter::Humidity => self.humidity,
            Parameter::Ph => self.ph,
            Parameter::Rainfall => self.rainfall,
        }
    }

    /// Combined N+P+K load, used by the nutrient yield factor.
    pub fn nutrient_total(&self) -> f64 {
        self.nitrogen + self.phosphorus + self.potassium
    }
}
