//! Configuration management for the Crop Recommendation Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CROPREC_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Recommendation engine configuration
    pub recommendation: RecommendationConfig,

    /// Usage analytics configuration
    pub usage: UsageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecommendationConfig {
    /// Alternatives returned when the request does not ask for a count
    pub default_alternatives: usize,

    /// Upper bound on requested alternatives
    pub max_alternatives: usize,

    /// Fixed seed for the yield jitter; unset means a fresh seed per process
    pub jitter_seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UsageConfig {
    /// Whether requests are counted at all
    pub enabled: bool,

    /// Path of the JSON usage log
    pub log_path: PathBuf,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("CROPREC_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("recommendation.default_alternatives", 3)?
            .set_default("recommendation.max_alternatives", 10)?
            .set_default("usage.enabled", true)?
            .set_default("usage.log_path", "usage_logs.json")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CROPREC_ prefix)
            .add_source(
                Environment::with_prefix("CROPREC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            default_alternatives: 3,
            max_alternatives: 10,
            jitter_seed: None,
        }
    }
}
