//! Business logic services for the Crop Recommendation Platform

pub mod recommendation;
pub mod usage;

pub use recommendation::RecommendationService;
pub use usage::UsageService;
