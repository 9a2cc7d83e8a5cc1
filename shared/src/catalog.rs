//! The immutable crop catalog
//!
//! One [`CropCatalog`] is built at process start, validated, and then shared
//! read-only by every scoring call. Iteration order is insertion order; the
//! composer relies on it for deterministic tie-breaking.

use thiserror::Error;

use crate::models::{ClimateComfort, CropCategory, CropProfile, ParameterBands, ParameterRange};
use crate::types::Parameter;

/// Catalog construction errors
#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("crop with empty name")]
    EmptyName,

    #[error("duplicate crop: {0}")]
    DuplicateCrop(String),

    #[error("invalid {parameter} range for {crop}: min > max")]
    InvalidRange { crop: String, parameter: Parameter },

    #[error("fertilizer efficiency for {crop} must be in (0, 1], got {value}")]
    InvalidEfficiency { crop: String, value: f64 },

    #[error("baseline constant for {crop} must be positive")]
    InvalidBaseline { crop: String },

    #[error("climate comfort bands for {crop} are inconsistent")]
    InvalidComfort { crop: String },
}

/// Validated, ordered set of crop profiles.
#[derive(Debug, Clone)]
pub struct CropCatalog {
    crops: Vec<CropProfile>,
}

impl CropCatalog {
    /// Build a catalog from profiles, checking every invariant the scoring
    /// engine depends on.
    pub fn new(crops: Vec<CropProfile>) -> Result<Self, CatalogError> {
        for (i, crop) in crops.iter().enumerate() {
            if crop.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if crops[..i].iter().any(|c| c.name == crop.name) {
                return Err(CatalogError::DuplicateCrop(crop.name.clone()));
            }
            for parameter in Parameter::ALL {
                let range = crop.range(parameter);
                if range.min > range.max {
                    return Err(CatalogError::InvalidRange {
                        crop: crop.name.clone(),
                        parameter,
                    });
                }
            }
            if crop.fertilizer_efficiency <= 0.0 || crop.fertilizer_efficiency > 1.0 {
                return Err(CatalogError::InvalidEfficiency {
                    crop: crop.name.clone(),
                    value: crop.fertilizer_efficiency,
                });
            }
            if crop.base_yield <= 0.0 || crop.water_need <= 0.0 {
                return Err(CatalogError::InvalidBaseline {
                    crop: crop.name.clone(),
                });
            }
            if let Some(comfort) = &crop.comfort {
                let bands_ordered = comfort.ideal_temperature.min <= comfort.ideal_temperature.max
                    && comfort.tolerable_temperature.min <= comfort.tolerable_temperature.max
                    && comfort.ideal_humidity.min <= comfort.ideal_humidity.max
                    && comfort.tolerable_humidity.min <= comfort.tolerable_humidity.max;
                let ideal_within_tolerable = comfort.tolerable_temperature.min
                    <= comfort.ideal_temperature.min
                    && comfort.ideal_temperature.max <= comfort.tolerable_temperature.max
                    && comfort.tolerable_humidity.min <= comfort.ideal_humidity.min
                    && comfort.ideal_humidity.max <= comfort.tolerable_humidity.max;
                if !bands_ordered || !ideal_within_tolerable || comfort.bonus_weight < 0.0 {
                    return Err(CatalogError::InvalidComfort {
                        crop: crop.name.clone(),
                    });
                }
            }
        }
        Ok(Self { crops })
    }

    /// The catalog bundled with the platform: 24 crops with their optimal
    /// bands and baseline yield/water/fertilizer constants.
    pub fn bundled() -> Result<Self, CatalogError> {
        use CropCategory::*;

        let mut pomegranate = profile(
            "pomegranate",
            Fruit,
            [
                (80.0, 120.0),
                (40.0, 60.0),
                (40.0, 60.0),
                (15.0, 30.0),
                (35.0, 70.0),
                (6.5, 7.5),
                (500.0, 800.0),
            ],
            15_000.0,
            800.0,
            0.8,
        );
        // Pomegranate tolerates dry heat far better than its optimal bands
        // suggest; the tiered climate response captures that.
        pomegranate.comfort = Some(ClimateComfort {
            ideal_temperature: ParameterRange::new(18.0, 30.0),
            tolerable_temperature: ParameterRange::new(15.0, 35.0),
            ideal_humidity: ParameterRange::new(40.0, 70.0),
            tolerable_humidity: ParameterRange::new(30.0, 80.0),
            bonus_weight: 1.0,
        });

        #[rustfmt::skip]
        let crops = vec![
            profile("rice", Cereal, [(80.0, 120.0), (40.0, 60.0), (35.0, 45.0), (20.0, 27.0), (80.0, 90.0), (5.5, 7.0), (1500.0, 2000.0)], 4500.0, 1500.0, 0.7),
            profile("wheat", Cereal, [(50.0, 80.0), (30.0, 50.0), (30.0, 50.0), (15.0, 25.0), (50.0, 70.0), (6.0, 7.5), (450.0, 650.0)], 3200.0, 600.0, 0.8),
            profile("maize", Cereal, [(70.0, 110.0), (35.0, 55.0), (20.0, 40.0), (18.0, 27.0), (60.0, 80.0), (5.8, 7.0), (600.0, 1000.0)], 5500.0, 800.0, 0.75),
            profile("cotton", CashCrop, [(100.0, 140.0), (40.0, 70.0), (40.0, 60.0), (21.0, 30.0), (50.0, 80.0), (5.8, 8.0), (600.0, 1200.0)], 1800.0, 1200.0, 0.6),
            profile("sugarcane", CashCrop, [(120.0, 160.0), (50.0, 80.0), (50.0, 80.0), (21.0, 30.0), (75.0, 85.0), (6.0, 7.5), (1000.0, 1500.0)], 70_000.0, 2000.0, 0.65),
            profile("jute", CashCrop, [(40.0, 80.0), (20.0, 40.0), (15.0, 35.0), (24.0, 35.0), (70.0, 90.0), (6.0, 7.5), (1000.0, 2000.0)], 2500.0, 1000.0, 0.7),
            profile("coffee", CashCrop, [(60.0, 100.0), (30.0, 50.0), (30.0, 50.0), (15.0, 25.0), (60.0, 80.0), (6.0, 7.0), (1200.0, 2000.0)], 1200.0, 1800.0, 0.8),
            profile("coconut", Fruit, [(80.0, 120.0), (40.0, 60.0), (60.0, 100.0), (25.0, 32.0), (70.0, 85.0), (5.5, 7.0), (1000.0, 2000.0)], 8000.0, 1200.0, 0.85),
            profile("papaya", Fruit, [(100.0, 140.0), (50.0, 80.0), (50.0, 80.0), (22.0, 32.0), (60.0, 85.0), (6.0, 7.0), (800.0, 1200.0)], 45_000.0, 1000.0, 0.75),
            profile("orange", Fruit, [(80.0, 120.0), (40.0, 60.0), (40.0, 60.0), (15.0, 30.0), (50.0, 80.0), (6.0, 7.5), (600.0, 1200.0)], 25_000.0, 900.0, 0.8),
            profile("apple", Fruit, [(60.0, 100.0), (30.0, 50.0), (30.0, 50.0), (15.0, 25.0), (60.0, 80.0), (6.0, 7.0), (1000.0, 1500.0)], 20_000.0, 800.0, 0.85),
            profile("muskmelon", Vegetable, [(80.0, 120.0), (40.0, 70.0), (50.0, 80.0), (24.0, 35.0), (50.0, 70.0), (6.0, 7.0), (400.0, 600.0)], 15_000.0, 600.0, 0.7),
            profile("watermelon", Vegetable, [(80.0, 120.0), (40.0, 70.0), (50.0, 80.0), (24.0, 35.0), (50.0, 70.0), (6.0, 7.0), (400.0, 600.0)], 25_000.0, 700.0, 0.7),
            profile("grapes", Fruit, [(60.0, 100.0), (35.0, 55.0), (40.0, 60.0), (15.0, 25.0), (60.0, 80.0), (6.0, 7.0), (500.0, 800.0)], 18_000.0, 650.0, 0.8),
            profile("mango", Fruit, [(80.0, 120.0), (40.0, 60.0), (40.0, 60.0), (24.0, 32.0), (60.0, 80.0), (5.5, 7.5), (800.0, 1200.0)], 12_000.0, 1100.0, 0.75),
            profile("banana", Fruit, [(100.0, 140.0), (50.0, 80.0), (60.0, 100.0), (26.0, 32.0), (75.0, 85.0), (6.0, 7.5), (1200.0, 2000.0)], 35_000.0, 1500.0, 0.7),
            pomegranate,
            profile("lentil", Pulse, [(20.0, 40.0), (20.0, 40.0), (15.0, 35.0), (15.0, 25.0), (50.0, 70.0), (6.0, 7.5), (300.0, 500.0)], 1200.0, 400.0, 0.9),
            profile("blackgram", Pulse, [(20.0, 40.0), (15.0, 35.0), (15.0, 35.0), (25.0, 35.0), (60.0, 80.0), (6.0, 7.0), (300.0, 500.0)], 800.0, 350.0, 0.85),
            profile("mungbean", Pulse, [(20.0, 40.0), (15.0, 35.0), (15.0, 35.0), (25.0, 35.0), (60.0, 80.0), (6.2, 7.2), (250.0, 400.0)], 900.0, 300.0, 0.9),
            profile("mothbeans", Pulse, [(15.0, 35.0), (10.0, 30.0), (10.0, 30.0), (27.0, 35.0), (50.0, 70.0), (6.5, 8.0), (200.0, 350.0)], 700.0, 250.0, 0.85),
            profile("pigeonpeas", Pulse, [(20.0, 40.0), (15.0, 35.0), (15.0, 35.0), (20.0, 30.0), (60.0, 80.0), (6.0, 7.5), (350.0, 500.0)], 1000.0, 400.0, 0.8),
            profile("kidneybeans", Pulse, [(40.0, 60.0), (25.0, 45.0), (20.0, 40.0), (15.0, 25.0), (60.0, 80.0), (6.0, 7.0), (400.0, 600.0)], 1500.0, 500.0, 0.8),
            profile("chickpea", Pulse, [(20.0, 40.0), (20.0, 40.0), (15.0, 35.0), (20.0, 30.0), (60.0, 80.0), (6.2, 7.8), (300.0, 500.0)], 1300.0, 350.0, 0.85),
        ];

        Self::new(crops)
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CropProfile> {
        self.crops.iter()
    }

    /// Look up a crop by its canonical key.
    pub fn get(&self, name: &str) -> Option<&CropProfile> {
        self.crops.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.crops.iter().map(|c| c.name.as_str())
    }
}

/// Assemble a profile without a climate override.
fn profile(
    name: &str,
    category: CropCategory,
    bands: [(f64, f64); 7],
    base_yield: f64,
    water_need: f64,
    fertilizer_efficiency: f64,
) -> CropProfile {
    let [nitrogen, phosphorus, potassium, temperature, humidity, ph, rainfall] =
        bands.map(|(min, max)| ParameterRange::new(min, max));
    CropProfile {
        name: name.to_string(),
        category,
        ranges: ParameterBands {
            nitrogen,
            phosphorus,
            potassium,
            temperature,
            humidity,
            ph,
            rainfall,
        },
        base_yield,
        water_need,
        fertilizer_efficiency,
        comfort: None,
    }
}
