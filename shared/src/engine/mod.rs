//! The suitability & metrics engine
//!
//! Three pure calculations over a [`crate::models::CropProfile`] and an
//! [`crate::models::Observation`] — suitability score, yield estimate,
//! sustainability score — plus the composer that ranks the whole catalog.

pub mod recommend;
pub mod suitability;
pub mod sustainability;
pub mod yield_model;

pub use recommend::*;
pub use suitability::*;
pub use sustainability::*;
pub use yield_model::*;
