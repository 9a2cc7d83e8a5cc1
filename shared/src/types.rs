//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// The seven soil and climate parameters every scoring call operates on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    #[serde(rename = "N")]
    Nitrogen,
    #[serde(rename = "P")]
    Phosphorus,
    #[serde(rename = "K")]
    Potassium,
    Temperature,
    Humidity,
    Ph,
    Rainfall,
}

impl Parameter {
    /// All parameters, in the canonical order used throughout the system.
    pub const ALL: [Parameter; 7] = [
        Parameter::Nitrogen,
        Parameter::Phosphorus,
        Parameter::Potassium,
        Parameter::Temperature,
        Parameter::Humidity,
        Parameter::Ph,
        Parameter::Rainfall,
    ];

    /// Wire/key name as it appears in API payloads.
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::Nitrogen => "N",
            Parameter::Phosphorus => "P",
            Parameter::Potassium => "K",
            Parameter::Temperature => "temperature",
            Parameter::Humidity => "humidity",
            Parameter::Ph => "ph",
            Parameter::Rainfall => "rainfall",
        }
    }

    /// Measurement unit, for help text and messages.
    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Nitrogen | Parameter::Phosphorus | Parameter::Potassium => "kg/ha",
            Parameter::Temperature => "°C",
            Parameter::Humidity => "%",
            Parameter::Ph => "",
            Parameter::Rainfall => "mm",
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Supported languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Bengali,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Bengali => "bn",
        }
    }
}
