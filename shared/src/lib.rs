//! Shared types and the scoring engine for the Crop Recommendation Platform
//!
//! This crate contains the crop catalog, the suitability/yield/sustainability
//! engine, and types shared between the backend, frontend (via WASM), and
//! other components of the system.

pub mod catalog;
pub mod engine;
pub mod i18n;
pub mod models;
pub mod types;
pub mod validation;

pub use catalog::*;
pub use engine::*;
pub use i18n::*;
pub use models::*;
pub use types::*;
pub use validation::*;
