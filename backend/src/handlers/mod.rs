//! HTTP handlers for the Crop Recommendation Platform

pub mod crops;
pub mod health;
pub mod recommendation;
pub mod usage;

pub use crops::*;
pub use health::*;
pub use recommendation::*;
pub use usage::*;
