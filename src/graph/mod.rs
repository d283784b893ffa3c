//! Graph analytics engine.
//!
//! Stateless analytics over caller-supplied intelligence graph snapshots:
//! centrality, path finding, community detection, anomaly detection,
//! risk influence and connection suggestions. Built on petgraph and
//! rustworkx-core.
//!
//! ## Architecture
//!
//! ```text
//! JSON / Vec<Node>, Vec<Edge> ──► validate_input ──► GraphIndex
//!                                                       │
//!            ┌──────────┬────────────┬──────────────┬───┴───────┐
//!         metrics     paths      community      anomalies   influence
//!            └──────────┴────────────┴──────────────┴───────────┘
//!                                     │
//!                  AnalyticsEngine (orchestrator) ──► ResultCache
//! ```
//!
//! ## Modules
//!
//! - [`models`] — Data structures (Node, Edge, GraphMetrics, Community, Anomaly, AnalyticsConfig)
//! - [`index`] — Validated adjacency built once per call
//! - [`metrics`] — Density, degree/betweenness/closeness centrality, components, clustering
//! - [`paths`] — Shortest path plus bounded alternate paths
//! - [`community`] — Greedy modularity communities
//! - [`anomalies`] — Isolated nodes, hubs, high-risk clusters, suspicious links
//! - [`influence`] — Risk influence and connection suggestions
//! - [`cache`] — Caller-owned last-result cache
//! - [`engine`] — `AnalyticsEngine` trait and `GraphAnalyticsEngine` orchestrator

pub mod anomalies;
pub mod cache;
pub mod community;
pub mod engine;
pub mod index;
pub mod influence;
pub mod metrics;
pub mod models;
pub mod paths;

// Re-export primary types for convenience
pub use cache::ResultCache;
pub use engine::{AnalyticsEngine, GraphAnalyticsEngine};
pub use index::{build_adjacency_list, GraphIndex};
pub use models::{
    validate_input, AnalyticsConfig, Anomaly, AnomalyType, CentralityKind, CentralityScores,
    Community, CommunityPartition, Edge, GraphMetrics, GraphSnapshot, Node, NodeType, PathResult,
    RiskLevel, Severity, Suggestion,
};
