//! Single-slot result cache.
//!
//! Holds the most recent metrics, communities and anomalies independently.
//! The cache is owned by the caller and handed to the engine by `&mut`; it is
//! never keyed by graph contents, so callers clear it when their snapshot
//! changes. It has no internal locking: a multi-threaded host wraps it in its
//! own `Mutex`.

use super::models::{Anomaly, Community, GraphMetrics};

/// Last computed analytics results.
#[derive(Debug, Clone, Default)]
pub struct ResultCache {
    metrics: Option<GraphMetrics>,
    communities: Option<Vec<Community>>,
    anomalies: Option<Vec<Anomaly>>,
}

impl ResultCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently computed metrics.
    pub fn metrics(&self) -> Option<&GraphMetrics> {
        self.metrics.as_ref()
    }

    /// Most recently computed communities.
    pub fn communities(&self) -> Option<&[Community]> {
        self.communities.as_deref()
    }

    /// Most recently computed anomalies.
    pub fn anomalies(&self) -> Option<&[Anomaly]> {
        self.anomalies.as_deref()
    }

    /// Replace the cached metrics.
    pub fn set_metrics(&mut self, metrics: GraphMetrics) {
        self.metrics = Some(metrics);
    }

    /// Replace the cached communities.
    pub fn set_communities(&mut self, communities: Vec<Community>) {
        self.communities = Some(communities);
    }

    /// Replace the cached anomalies.
    pub fn set_anomalies(&mut self, anomalies: Vec<Anomaly>) {
        self.anomalies = Some(anomalies);
    }

    /// Reset all three slots.
    pub fn clear(&mut self) {
        self.metrics = None;
        self.communities = None;
        self.anomalies = None;
    }

    /// Whether no slot holds a result.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_none() && self.communities.is_none() && self.anomalies.is_none()
    }
}
