//! Recon Graph Analytics
//!
//! Analytics engine for reconnaissance intelligence graphs:
//! - Graph metrics (density, degree/betweenness/closeness centrality, components)
//! - Shortest and alternate path discovery between entities
//! - Community detection by greedy modularity optimization
//! - Anomaly detection (isolated nodes, hubs, high-risk clusters, suspicious links)
//! - Risk influence scoring and connection suggestions
//!
//! Every operation takes a full node/edge snapshot and recomputes from scratch.

pub mod error;
pub mod graph;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::{AnalyticsError, Result};
pub use graph::{
    AnalyticsConfig, AnalyticsEngine, Anomaly, AnomalyType, Community, CommunityPartition, Edge,
    GraphAnalyticsEngine, GraphMetrics, GraphSnapshot, Node, NodeType, PathResult, ResultCache,
    RiskLevel, Severity, Suggestion,
};

use std::path::Path;
use std::str::FromStr;

// ============================================================================
// Configuration loading
// ============================================================================

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "graph-analytics.yaml";

impl AnalyticsConfig {
    /// Load configuration from environment variables only.
    /// Equivalent to from_yaml_and_env(None).
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_yaml_and_env(None)
    }

    /// Load configuration from an optional YAML file, then override with env vars.
    ///
    /// Priority: env var > YAML > default
    ///
    /// If `yaml_path` is None, tries [`DEFAULT_CONFIG_FILE`] in CWD. If the file
    /// doesn't exist, falls back to env vars / defaults.
    pub fn from_yaml_and_env(yaml_path: Option<&Path>) -> anyhow::Result<Self> {
        // 1. Load YAML config (or defaults if file not found)
        let yaml = Self::load_yaml(yaml_path);

        // 2. Apply env var overrides
        Ok(Self {
            max_extra_path_hops: env_or("GRAPH_ANALYTICS_MAX_EXTRA_HOPS", yaml.max_extra_path_hops),
            max_paths: env_or("GRAPH_ANALYTICS_MAX_PATHS", yaml.max_paths),
            hub_stddev_factor: env_or("GRAPH_ANALYTICS_HUB_STDDEV", yaml.hub_stddev_factor),
            high_risk_cluster_threshold: env_or(
                "GRAPH_ANALYTICS_HIGH_RISK_THRESHOLD",
                yaml.high_risk_cluster_threshold,
            ),
            max_suggestions: env_or("GRAPH_ANALYTICS_MAX_SUGGESTIONS", yaml.max_suggestions),
            ..yaml
        })
    }

    /// Try to load and parse a YAML config file. Returns defaults on any failure.
    fn load_yaml(yaml_path: Option<&Path>) -> AnalyticsConfig {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        let path = yaml_path.unwrap_or(default_path);

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded analytics config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    AnalyticsConfig::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {}, using env vars / defaults",
                    path.display()
                );
                AnalyticsConfig::default()
            }
        }
    }
}

/// Parse an env var, keeping `fallback` when it is unset or unparsable.
fn env_or<T: FromStr>(var: &str, fallback: T) -> T {
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unparsable {}={:?}", var, raw);
            fallback
        }),
        Err(_) => fallback,
    }
}

// ============================================================================
// Tests
// ============================================================================
