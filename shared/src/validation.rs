//! Input validation for the Crop Recommendation Platform
//!
//! Two layers: missing parameters are fatal and rejected before an
//! [`Observation`] exists; values outside an agronomically plausible range
//! are warnings only — the engine still scores them and the caller decides
//! what to surface.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Observation, ParameterRange};
use crate::types::Parameter;

/// Caller-supplied observation before completeness checking. Every field is
/// optional here so that a request missing several parameters can be
/// reported in full rather than failing on the first one.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ObservationInput {
    #[serde(rename = "N")]
    pub nitrogen: Option<f64>,
    #[serde(rename = "P")]
    pub phosphorus: Option<f64>,
    #[serde(rename = "K")]
    pub potassium: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub ph: Option<f64>,
    pub rainfall: Option<f64>,
}

impl ObservationInput {
    fn get(&self, parameter: Parameter) -> Option<f64> {
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

    fn complete(&self) -> Option<Observation> {
        Some(Observation {
            nitrogen: self.nitrogen?,
            phosphorus: self.phosphorus?,
            potassium: self.potassium?,
            temperature: self.temperature?,
            humidity: self.humidity?,
            ph: self.ph?,
            rainfall: self.rainfall?,
        })
    }
}

/// One or more of the seven required parameters was absent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required parameters: {}", fields.join(", "))]
pub struct MissingParameterError {
    /// Wire keys of every absent field, in canonical parameter order.
    pub fields: Vec<String>,
}

/// Promote a partial input to a complete observation, or report every
/// missing field at once. The engine is never invoked on defaults.
pub fn build_observation(input: &ObservationInput) -> Result<Observation, MissingParameterError> {
    input.complete().ok_or_else(|| MissingParameterError {
        fields: Parameter::ALL
            .iter()
            .filter(|&&p| input.get(p).is_none())
            .map(|p| p.key().to_string())
            .collect(),
    })
}

/// Plausible range for one input parameter. Values outside it are almost
/// certainly measurement or unit errors, but scoring remains defined.
pub fn plausible_range(parameter: Parameter) -> ParameterRange {
    match parameter {
        Parameter::Nitrogen => ParameterRange::new(0.0, 200.0),
        Parameter::Phosphorus => ParameterRange::new(0.0, 150.0),
        Parameter::Potassium => ParameterRange::new(0.0, 300.0),
        Parameter::Temperature => ParameterRange::new(0.0, 50.0),
        Parameter::Humidity => ParameterRange::new(0.0, 100.0),
        Parameter::Ph => ParameterRange::new(3.0, 10.0),
        Parameter::Rainfall => ParameterRange::new(0.0, 3000.0),
    }
}

/// Check an observation against every plausible range, returning one
/// warning string per offending parameter. Empty means fully plausible.
pub fn validate_observation(observation: &Observation) -> Vec<String> {
    let mut warnings = Vec::new();
    for parameter in Parameter::ALL {
        let value = observation.get(parameter);
        let range = plausible_range(parameter);
        if !value.is_finite() {
            warnings.push(format!("{}: value is not a finite number", parameter.key()));
        } else if !range.contains(value) {
            warnings.push(format!(
                "{}: {} is outside typical range ({}-{})",
                parameter.key(),
                value,
                range.min,
                range.max
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plausible() -> Observation {
        Observation {
            nitrogen: 90.0,
            phosphorus: 42.0,
            potassium: 43.0,
            temperature: 21.0,
            humidity: 82.0,
            ph: 6.5,
            rainfall: 203.0,
        }
    }

    #[test]
    fn plausible_observation_has_no_warnings() {
        assert!(validate_observation(&plausible()).is_empty());
    }

    #[test]
    fn impossible_humidity_warns_but_does_not_fail() {
        let mut observation = plausible();
        observation.humidity = 150.0;
        let warnings = validate_observation(&observation);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("humidity"));
        assert!(warnings[0].contains("150"));
    }

    #[test]
    fn boundary_values_are_plausible() {
        let mut observation = plausible();
        observation.humidity = 100.0;
        observation.ph = 3.0;
        observation.rainfall = 3000.0;
        assert!(validate_observation(&observation).is_empty());
    }

    #[test]
    fn every_offending_parameter_gets_its_own_warning() {
        let observation = Observation {
            nitrogen: 250.0,
            phosphorus: -5.0,
            potassium: 43.0,
            temperature: 60.0,
            humidity: 82.0,
            ph: 6.5,
            rainfall: 203.0,
        };
        let warnings = validate_observation(&observation);
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().any(|w| w.starts_with("N:")));
        assert!(warnings.iter().any(|w| w.starts_with("P:")));
        assert!(warnings.iter().any(|w| w.starts_with("temperature:")));
    }

    #[test]
    fn non_finite_values_warn() {
        let mut observation = plausible();
        observation.rainfall = f64::NAN;
        let warnings = validate_observation(&observation);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("rainfall"));
    }

    fn full_input() -> ObservationInput {
        ObservationInput {
            nitrogen: Some(90.0),
            phosphorus: Some(42.0),
            potassium: Some(43.0),
            temperature: Some(21.0),
            humidity: Some(82.0),
            ph: Some(6.5),
            rainfall: Some(203.0),
        }
    }

    #[test]
    fn complete_input_builds_an_observation() {
        let observation = build_observation(&full_input()).unwrap();
        assert_eq!(observation, plausible());
    }

    #[test]
    fn missing_rainfall_is_reported_by_name() {
        let mut input = full_input();
        input.rainfall = None;
        let err = build_observation(&input).unwrap_err();
        assert_eq!(err.fields, vec!["rainfall"]);
        assert!(err.to_string().contains("rainfall"));
    }

    #[test]
    fn all_missing_fields_are_reported_in_canonical_order() {
        let input = ObservationInput {
            phosphorus: Some(42.0),
            humidity: Some(82.0),
            ..ObservationInput::default()
        };
        let err = build_observation(&input).unwrap_err();
        assert_eq!(err.fields, vec!["N", "K", "temperature", "ph", "rainfall"]);
    }

    #[test]
    fn empty_input_reports_all_seven() {
        let err = build_observation(&ObservationInput::default()).unwrap_err();
        assert_eq!(err.fields.len(), 7);
    }
}
