//! Read-only data store
//!
//! Holds every collection the dashboard renders. A store is built once (from the
//! built-in sample or a JSON document) and never mutated afterwards; share it
//! behind an `Arc`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::error::{DataError, DataResult};
use super::sample;
use super::types::*;

/// The complete in-memory dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataStore {
    pub competitors: Vec<Competitor>,
    pub alerts: Vec<Alert>,
    pub reports: Vec<Report>,
    pub user_profile: UserProfile,
    pub pricing_plans: Vec<PricingPlan>,
    #[serde(default)]
    pub activity: Vec<ActivityEvent>,
    #[serde(default = "sample::threat_trend")]
    pub threat_trend: ThreatTrend,
}

impl Default for DataStore {
    fn default() -> Self {
        Self::sample()
    }
}

impl DataStore {
    /// The built-in demo dataset
    pub fn sample() -> Self {
        sample::sample_store()
    }

    /// Parse a store from a JSON document
    pub fn from_json(json: &str) -> DataResult<Self> {
        let store: DataStore = serde_json::from_str(json)?;
        store.validate()?;
        Ok(store)
    }

    /// Load a store from a JSON file
    pub fn load(path: &Path) -> DataResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DataError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let store = Self::from_json(&content)?;
        tracing::info!(
            path = ?path,
            competitors = store.competitors.len(),
            alerts = store.alerts.len(),
            reports = store.reports.len(),
            "Loaded data store"
        );
        Ok(store)
    }

    /// Check that identities are unique within each collection
    pub fn validate(&self) -> DataResult<()> {
        check_unique("competitors", self.competitors.iter().map(|c| c.id))?;
        check_unique("alerts", self.alerts.iter().map(|a| a.id))?;
        check_unique("reports", self.reports.iter().map(|r| r.id))?;
        Ok(())
    }

    /// Unread alerts in stored order, truncated to `limit`
    pub fn unread_alerts(&self, limit: usize) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| !a.read).take(limit)
    }

    /// Number of unread alerts
    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.read).count()
    }

    /// Number of competitors at the given threat level
    pub fn threat_count(&self, level: ThreatLevel) -> usize {
        self.competitors
            .iter()
            .filter(|c| c.threat_level == level)
            .count()
    }
}

fn check_unique(collection: &'static str, ids: impl Iterator<Item = u32>) -> DataResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId { collection, id });
        }
    }
    Ok(())
}
