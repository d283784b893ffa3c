//! Graph analytics data models.
//!
//! Defines the complete type system for the analytics engine:
//!
//! ## Input types (ingestion)
//! - [`NodeType`] / [`RiskLevel`] / [`Node`] — entities discovered by reconnaissance
//! - [`Edge`] — relationships between entities
//! - [`GraphSnapshot`] — validating JSON boundary for a full node/edge snapshot
//!
//! ## Output types (analytics)
//! - [`GraphMetrics`] / [`CentralityScores`] — global metrics and per-node centrality
//! - [`Community`] / [`CommunityPartition`] — greedy modularity partitions
//! - [`Anomaly`] — structural and risk-based findings
//! - [`PathResult`] — shortest and alternate paths between two entities
//! - [`Suggestion`] — ranked connection candidates
//!
//! ## Configuration
//! - [`AnalyticsConfig`] — tuning parameters for the analytics algorithms

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

use crate::error::{AnalyticsError, Result};

// ============================================================================
// Input types — entities and relationships
// ============================================================================

/// Kind of intelligence artifact a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Domain,
    Subdomain,
    IpAddress,
    Email,
    Phone,
    Person,
    Organization,
    Url,
    Username,
    SocialProfile,
    Hash,
    Certificate,
    Location,
    Other,
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Domain => "DOMAIN",
            Self::Subdomain => "SUBDOMAIN",
            Self::IpAddress => "IP_ADDRESS",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Person => "PERSON",
            Self::Organization => "ORGANIZATION",
            Self::Url => "URL",
            Self::Username => "USERNAME",
            Self::SocialProfile => "SOCIAL_PROFILE",
            Self::Hash => "HASH",
            Self::Certificate => "CERTIFICATE",
            Self::Location => "LOCATION",
            Self::Other => "OTHER",
        };
        f.write_str(s)
    }
}

/// Ordinal risk bucket assigned by the risk-scoring subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Bucket a risk score the way the scoring subsystem does
    /// (CRITICAL ≥ 0.9, HIGH ≥ 0.7, MEDIUM ≥ 0.4, LOW ≥ 0.2).
    ///
    /// The engine never rewrites a level supplied by the caller; this is a
    /// convenience for building snapshots.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.9 => Self::Critical,
            s if s >= 0.7 => Self::High,
            s if s >= 0.4 => Self::Medium,
            s if s >= 0.2 => Self::Low,
            _ => Self::Info,
        }
    }

    /// Position on the INFO..CRITICAL scale (0..=4).
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// An entity in the intelligence graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier within a snapshot
    pub id: String,
    /// Kind of artifact
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Risk score in [0, 1]
    pub risk_score: f64,
    /// Risk bucket derived from `risk_score` by the caller
    pub risk_level: RiskLevel,
    /// Raw artifact value (e.g. the domain name or address)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Node {
    /// Create a node whose risk level is bucketed from `risk_score`.
    pub fn new(id: impl Into<String>, node_type: NodeType, risk_score: f64) -> Self {
        Self {
            id: id.into(),
            node_type,
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
            value: None,
            label: None,
        }
    }

    /// Override the risk level.
    pub fn with_level(mut self, level: RiskLevel) -> Self {
        self.risk_level = level;
        self
    }

    /// Attach the raw artifact value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Human-readable name: label, then value, then id.
    pub fn display_name(&self) -> &str {
        self.label
            .as_deref()
            .or(self.value.as_deref())
            .unwrap_or(&self.id)
    }
}

/// A relationship between two entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Unique identifier within a snapshot
    pub id: String,
    /// Source node id (may be unknown to the snapshot; such edges are ignored)
    pub source: String,
    /// Target node id (may be unknown to the snapshot; such edges are ignored)
    pub target: String,
    /// Relationship kind (e.g. COMMUNICATES_WITH, OWNS, MENTIONS)
    #[serde(rename = "type")]
    pub edge_type: String,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// `Some(false)` restricts path traversal to source → target.
    /// Absent means undirected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidirectional: Option<bool>,
}

impl Edge {
    /// Create an undirected edge.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        edge_type: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            edge_type: edge_type.into(),
            confidence,
            bidirectional: None,
        }
    }

    /// Restrict (or explicitly allow) reverse traversal.
    pub fn with_bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = Some(bidirectional);
        self
    }

    /// Whether the path finder may walk this edge target → source.
    pub fn traversable_backwards(&self) -> bool {
        self.bidirectional.unwrap_or(true)
    }
}

/// A full node/edge snapshot as delivered by the surrounding application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// Parse and validate a JSON snapshot.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Validate the shape of a loosely-typed JSON snapshot, then convert it.
    ///
    /// Shape errors (missing arrays, non-object entries, missing `id`) are
    /// reported with the offending position rather than serde's generic message.
    pub fn from_value(value: Value) -> Result<Self> {
        check_shape(&value)?;
        let snapshot: GraphSnapshot = serde_json::from_value(value)?;
        validate_input(&snapshot.nodes, &snapshot.edges)?;
        Ok(snapshot)
    }
}

fn check_shape(value: &Value) -> Result<()> {
    let obj = value
        .as_object()
        .ok_or_else(|| AnalyticsError::invalid("snapshot must be a JSON object"))?;

    for key in ["nodes", "edges"] {
        let items = match obj.get(key) {
            Some(Value::Array(items)) => items,
            None if key == "edges" => continue,
            Some(_) => return Err(AnalyticsError::invalid(format!("`{key}` must be an array"))),
            None => return Err(AnalyticsError::invalid(format!("missing `{key}` array"))),
        };
        for (i, item) in items.iter().enumerate() {
            let entry = item
                .as_object()
                .ok_or_else(|| AnalyticsError::invalid(format!("{key}[{i}] is not an object")))?;
            match entry.get("id") {
                Some(Value::String(id)) if !id.is_empty() => {}
                _ => {
                    return Err(AnalyticsError::invalid(format!(
                        "{key}[{i}] has no string `id`"
                    )))
                }
            }
        }
    }
    Ok(())
}

/// Validate typed input before any computation runs.
///
/// Dangling edge endpoints are accepted; the graph index drops them.
pub fn validate_input(nodes: &[Node], edges: &[Edge]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if node.id.is_empty() {
            return Err(AnalyticsError::invalid("node with empty id"));
        }
        if !seen.insert(node.id.as_str()) {
            return Err(AnalyticsError::DuplicateNodeId(node.id.clone()));
        }
        if !unit_interval(node.risk_score) {
            return Err(AnalyticsError::invalid(format!(
                "node '{}' has riskScore {} outside [0, 1]",
                node.id, node.risk_score
            )));
        }
    }
    for edge in edges {
        if edge.id.is_empty() {
            return Err(AnalyticsError::invalid("edge with empty id"));
        }
        if !unit_interval(edge.confidence) {
            return Err(AnalyticsError::invalid(format!(
                "edge '{}' has confidence {} outside [0, 1]",
                edge.id, edge.confidence
            )));
        }
    }
    Ok(())
}

fn unit_interval(x: f64) -> bool {
    x.is_finite() && (0.0..=1.0).contains(&x)
}

// ============================================================================
// Output types — Analytics results
// ============================================================================

/// Which centrality measure to rank by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CentralityKind {
    Degree,
    Betweenness,
    Closeness,
}

/// Per-node centrality scores, all normalized to [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CentralityScores {
    /// Neighbor count / (n - 1)
    pub degree: HashMap<String, f64>,
    /// Brandes betweenness on the undirected adjacency
    pub betweenness: HashMap<String, f64>,
    /// (reachable - 1) / sum of BFS distances, within the node's component
    pub closeness: HashMap<String, f64>,
}

impl CentralityScores {
    fn scores(&self, kind: CentralityKind) -> &HashMap<String, f64> {
        match kind {
            CentralityKind::Degree => &self.degree,
            CentralityKind::Betweenness => &self.betweenness,
            CentralityKind::Closeness => &self.closeness,
        }
    }

    /// The `n` highest-scoring nodes for a measure, ties broken by id.
    pub fn top_n(&self, kind: CentralityKind, n: usize) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .scores(kind)
            .iter()
            .map(|(id, score)| (id.clone(), *score))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }
}

/// Global connectivity metrics for a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetrics {
    /// Number of supplied nodes
    pub node_count: usize,
    /// Number of edges whose endpoints both resolve
    pub edge_count: usize,
    /// edge_count / (n (n - 1) / 2), clamped into [0, 1]
    pub density: f64,
    /// 2 * edge_count / n
    pub avg_degree: f64,
    /// Per-node centrality
    pub centrality: CentralityScores,
    /// Number of connected components (isolated nodes count as one each)
    pub component_count: usize,
    /// Size of the largest connected component
    pub largest_component_size: usize,
    /// Mean local clustering coefficient
    pub avg_clustering: f64,
}

/// A structurally cohesive group of nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    /// Community identifier (0 = largest)
    pub id: u32,
    /// Member node ids
    pub members: Vec<String>,
    /// Number of members
    pub size: usize,
    /// This community's modularity contribution, clamped into [0, 1]
    pub modularity: f64,
    /// Display color, `#rrggbb`
    pub color: String,
    /// Auto-generated label from the dominant entity type
    pub label: String,
    /// Mean risk score of the members
    pub avg_risk_score: f64,
}

/// A full partition with its overall modularity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPartition {
    pub communities: Vec<Community>,
    /// Newman modularity Q of the whole partition
    pub modularity: f64,
}

/// Rule that produced an anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalyType {
    IsolatedNode,
    HubOutlier,
    HighRiskCluster,
    SuspiciousConnection,
}

impl std::fmt::Display for AnomalyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IsolatedNode => write!(f, "ISOLATED_NODE"),
            Self::HubOutlier => write!(f, "HUB_OUTLIER"),
            Self::HighRiskCluster => write!(f, "HIGH_RISK_CLUSTER"),
            Self::SuspiciousConnection => write!(f, "SUSPICIOUS_CONNECTION"),
        }
    }
}

/// Anomaly severity, ordered LOW < MEDIUM < HIGH < CRITICAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// A structural or risk-based finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    #[serde(rename = "type")]
    pub anomaly_type: AnomalyType,
    pub severity: Severity,
    /// Human-readable explanation
    pub explanation: String,
    /// Affected node ids
    pub node_ids: Vec<String>,
}

/// Result of a path query between two nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    /// Node ids from source to target inclusive; empty when unreachable
    pub shortest_path: Vec<String>,
    /// Edge count of `shortest_path`; `None` when unreachable
    pub shortest_path_length: Option<usize>,
    /// Distinct simple paths, shortest first
    pub all_paths: Vec<Vec<String>>,
}

impl PathResult {
    /// The result for an unknown or disconnected pair.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether a path was found.
    pub fn is_connected(&self) -> bool {
        !self.shortest_path.is_empty()
    }
}

/// A ranked connection candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub node: Node,
    /// Similarity in [0, 1]
    pub similarity: f64,
    /// Why the candidate was suggested
    pub reason: String,
}

// ============================================================================
// Configuration
// ============================================================================

/// Tuning parameters for the analytics algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Alternate paths may be at most this many hops longer than the shortest (default: 3)
    pub max_extra_path_hops: usize,
    /// Maximum number of enumerated paths (default: 50)
    pub max_paths: usize,
    /// Hub threshold in standard deviations above mean degree (default: 2.0)
    pub hub_stddev_factor: f64,
    /// Hubs beyond this many standard deviations are HIGH severity (default: 3.0)
    pub hub_high_stddev_factor: f64,
    /// Mean community risk at or above which a cluster is flagged (default: 0.7)
    pub high_risk_cluster_threshold: f64,
    /// Mean community risk at or above which a cluster is CRITICAL (default: 0.9)
    pub critical_cluster_threshold: f64,
    /// Smallest community considered a cluster (default: 2)
    pub min_cluster_size: usize,
    /// Minimum confidence for a CRITICAL↔low-risk link to be suspicious (default: 0.8)
    pub suspicious_link_confidence: f64,
    /// Share of influence taken from the node's own risk (default: 0.6)
    pub influence_self_weight: f64,
    /// Maximum number of suggestions returned (default: 10)
    pub max_suggestions: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            max_extra_path_hops: 3,
            max_paths: 50,
            hub_stddev_factor: 2.0,
            hub_high_stddev_factor: 3.0,
            high_risk_cluster_threshold: 0.7,
            critical_cluster_threshold: 0.9,
            min_cluster_size: 2,
            suspicious_link_confidence: 0.8,
            influence_self_weight: 0.6,
            max_suggestions: 10,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- AnalyticsConfig ---

    #[test]
    fn test_analytics_config_defaults() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.max_extra_path_hops, 3);
        assert_eq!(config.max_paths, 50);
        assert!((config.hub_stddev_factor - 2.0).abs() < f64::EPSILON);
        assert!((config.high_risk_cluster_threshold - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.max_suggestions, 10);
    }

    #[test]
    fn test_analytics_config_partial_yaml_uses_defaults() {
        let config: AnalyticsConfig = serde_yaml::from_str("max_paths: 7\n").unwrap();
        assert_eq!(config.max_paths, 7);
        assert_eq!(config.max_extra_path_hops, 3);
    }

    // --- RiskLevel ---

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Info < RiskLevel::Low);
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
        assert_eq!(RiskLevel::Critical.rank(), 4);
    }

    #[test]
    fn test_risk_level_from_score() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Info);
        assert_eq!(RiskLevel::from_score(0.2), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.4), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(0.7), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(0.9), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(1.0), RiskLevel::Critical);
    }

    #[test]
    fn test_risk_level_matches_scored_sample() {
        let expected = [
            (0.8, RiskLevel::High),
            (0.6, RiskLevel::Medium),
            (0.3, RiskLevel::Low),
            (0.95, RiskLevel::Critical),
            (0.1, RiskLevel::Info),
        ];
        for (score, level) in expected {
            assert_eq!(RiskLevel::from_score(score), level, "score {}", score);
        }
    }

    // --- Node / Edge ---

    #[test]
    fn test_node_json_uses_wire_names() {
        let node = Node::new("n1", NodeType::IpAddress, 0.6).with_value("10.0.0.1");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "IP_ADDRESS");
        assert_eq!(json["riskLevel"], "MEDIUM");
        assert_eq!(json["riskScore"], 0.6);
        assert_eq!(node.display_name(), "10.0.0.1");
    }

    #[test]
    fn test_edge_direction_defaults_to_undirected() {
        let edge = Edge::new("e1", "a", "b", "OWNS", 0.9);
        assert!(edge.traversable_backwards());
        assert!(!edge.with_bidirectional(false).traversable_backwards());
    }

    #[test]
    fn test_node_type_display() {
        assert_eq!(NodeType::IpAddress.to_string(), "IP_ADDRESS");
        assert_eq!(NodeType::SocialProfile.to_string(), "SOCIAL_PROFILE");
    }

    // --- GraphSnapshot ---

    #[test]
    fn test_snapshot_from_json() {
        let json = r#"{
            "nodes": [
                {"id": "1", "type": "DOMAIN", "riskScore": 0.8, "riskLevel": "HIGH", "value": "evil.example"},
                {"id": "2", "type": "IP_ADDRESS", "riskScore": 0.6, "riskLevel": "MEDIUM"}
            ],
            "edges": [
                {"id": "e1", "source": "1", "target": "2", "type": "RESOLVES_TO", "confidence": 0.9}
            ]
        }"#;
        let snapshot = GraphSnapshot::from_json_str(json).unwrap();
        assert_eq!(snapshot.nodes.len(), 2);
        assert_eq!(snapshot.edges[0].edge_type, "RESOLVES_TO");
        assert_eq!(snapshot.nodes[0].value.as_deref(), Some("evil.example"));
    }

    #[test]
    fn test_snapshot_edges_optional() {
        let json = r#"{"nodes": [{"id": "1", "type": "EMAIL", "riskScore": 0.1, "riskLevel": "INFO"}]}"#;
        let snapshot = GraphSnapshot::from_json_str(json).unwrap();
        assert!(snapshot.edges.is_empty());
    }

    #[test]
    fn test_snapshot_rejects_non_array_nodes() {
        let err = GraphSnapshot::from_json_str(r#"{"nodes": {"id": "1"}}"#).unwrap_err();
        assert!(err.to_string().contains("`nodes` must be an array"), "{}", err);
    }

    #[test]
    fn test_snapshot_rejects_node_without_id() {
        let json = r#"{"nodes": [{"type": "EMAIL", "riskScore": 0.1, "riskLevel": "INFO"}]}"#;
        let err = GraphSnapshot::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("nodes[0]"), "{}", err);
    }

    #[test]
    fn test_snapshot_rejects_scalar_entry() {
        let err = GraphSnapshot::from_json_str(r#"{"nodes": [42]}"#).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput { .. }));
    }

    // --- validate_input ---

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let nodes = vec![
            Node::new("a", NodeType::Domain, 0.1),
            Node::new("a", NodeType::Email, 0.2),
        ];
        let err = validate_input(&nodes, &[]).unwrap_err();
        assert!(matches!(err, AnalyticsError::DuplicateNodeId(id) if id == "a"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_scores() {
        let nodes = vec![Node::new("a", NodeType::Domain, 1.5)];
        assert!(validate_input(&nodes, &[]).is_err());

        let nodes = vec![Node::new("a", NodeType::Domain, f64::NAN)];
        assert!(validate_input(&nodes, &[]).is_err());

        let nodes = vec![Node::new("a", NodeType::Domain, 0.5)];
        let edges = vec![Edge::new("e", "a", "a", "MENTIONS", -0.1)];
        assert!(validate_input(&nodes, &edges).is_err());
    }

    #[test]
    fn test_validate_accepts_dangling_edges() {
        let nodes = vec![Node::new("a", NodeType::Domain, 0.5)];
        let edges = vec![Edge::new("e", "a", "ghost", "MENTIONS", 0.5)];
        assert!(validate_input(&nodes, &edges).is_ok());
    }

    // --- CentralityScores ---

    #[test]
    fn test_top_n_orders_by_score_then_id() {
        let mut scores = CentralityScores::default();
        scores.degree.insert("b".to_string(), 0.5);
        scores.degree.insert("a".to_string(), 0.5);
        scores.degree.insert("c".to_string(), 0.9);
        let top = scores.top_n(CentralityKind::Degree, 2);
        assert_eq!(top[0].0, "c");
        assert_eq!(top[1].0, "a");
    }
}
