//! Usage analytics service
//!
//! Counts requests per day, per endpoint and per recommended crop in a flat
//! JSON log. The log is best-effort telemetry: a missing or corrupt file on
//! startup starts the counters fresh, and a failed write never fails the
//! request that triggered it.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::UsageConfig;

/// How many days of history the stats view returns.
const RECENT_DAYS: usize = 7;

/// How many top crops the stats view returns.
const TOP_CROPS: usize = 5;

/// Persisted counter state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UsageCounters {
    total_requests: u64,
    daily_stats: BTreeMap<NaiveDate, u64>,
    endpoint_stats: BTreeMap<String, u64>,
    crop_recommendations: BTreeMap<String, u64>,
}

/// Usage analytics service
#[derive(Clone)]
pub struct UsageService {
    counters: Arc<Mutex<UsageCounters>>,
    log_path: PathBuf,
    enabled: bool,
}

/// Aggregated statistics as served to clients
#[derive(Debug, Serialize)]
pub struct UsageStats {
    pub total_requests: u64,
    pub today_requests: u64,
    pub recent_daily_stats: BTreeMap<NaiveDate, u64>,
    pub endpoint_usage: BTreeMap<String, u64>,
    pub top_recommended_crops: Vec<CropUsage>,
    pub last_updated: DateTime<Utc>,
}

/// Request count for one crop
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CropUsage {
    pub crop: String,
    pub count: u64,
}

impl UsageService {
    /// Create the service, restoring counters from the log if it exists.
    pub async fn load(config: &UsageConfig) -> Self {
        let counters = if config.enabled {
            match tokio::fs::read(&config.log_path).await {
                Ok(bytes) => match serde_json::from_slice(&bytes) {
                    Ok(counters) => counters,
                    Err(e) => {
                        tracing::warn!(
                            "Usage log {} is unreadable, starting fresh: {}",
                            config.log_path.display(),
                            e
                        );
                        UsageCounters::default()
                    }
                },
                Err(_) => UsageCounters::default(),
            }
        } else {
            UsageCounters::default()
        };

        Self {
            counters: Arc::new(Mutex::new(counters)),
            log_path: config.log_path.clone(),
            enabled: config.enabled,
        }
    }

    /// Count one request and persist the counters.
    pub async fn record(&self, endpoint: &str, recommended_crop: Option<&str>) {
        if !self.enabled {
            return;
        }

        let snapshot = {
            let mut counters = self.counters.lock().await;
            counters.total_requests += 1;
            *counters
                .daily_stats
                .entry(Utc::now().date_naive())
                .or_insert(0) += 1;
            *counters
                .endpoint_stats
                .entry(endpoint.to_string())
                .or_insert(0) += 1;
            if let Some(crop) = recommended_crop {
                *counters
                    .crop_recommendations
                    .entry(crop.to_string())
                    .or_insert(0) += 1;
            }
            counters.clone()
        };

        if let Err(e) = self.persist(&snapshot).await {
            tracing::warn!(
                "Failed to persist usage log {}: {}",
                self.log_path.display(),
                e
            );
        }
    }

    /// Aggregate statistics over the current counters.
    pub async fn stats(&self) -> UsageStats {
        let counters = self.counters.lock().await;
        let today = Utc::now().date_naive();

        let recent_daily_stats: BTreeMap<NaiveDate, u64> = counters
            .daily_stats
            .iter()
            .rev()
            .take(RECENT_DAYS)
            .map(|(date, count)| (*date, *count))
            .collect();

        let mut top: Vec<CropUsage> = counters
            .crop_recommendations
            .iter()
            .map(|(crop, count)| CropUsage {
                crop: crop.clone(),
                count: *count,
            })
            .collect();
        top.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.crop.cmp(&b.crop)));
        top.truncate(TOP_CROPS);

        UsageStats {
            total_requests: counters.total_requests,
            today_requests: counters.daily_stats.get(&today).copied().unwrap_or(0),
            recent_daily_stats,
            endpoint_usage: counters.endpoint_stats.clone(),
            top_recommended_crops: top,
            last_updated: Utc::now(),
        }
    }

    async fn persist(&self, counters: &UsageCounters) -> std::io::Result<()> {
        let json = serde_json::to_vec_pretty(counters)?;
        tokio::fs::write(&self.log_path, json).await
    }
}
