//! Analytics engine — the public entry point for every analysis.
//!
//! The `AnalyticsEngine` trait is the single seam consumers depend on. Each
//! operation:
//!
//! 1. **Validates** the snapshot (shape and value ranges)
//! 2. **Indexes** it once via [`GraphIndex::build`]
//! 3. **Computes** one analysis on that index
//! 4. **Caches** the result where applicable, in the caller's [`ResultCache`]
//!
//! Calls are synchronous and run to completion; nothing is shared between
//! calls except the cache the caller passes in.

use std::collections::HashMap;
use std::time::Instant;

use super::anomalies;
use super::cache::ResultCache;
use super::community;
use super::index::GraphIndex;
use super::influence;
use super::metrics;
use super::models::{
    validate_input, AnalyticsConfig, Anomaly, Community, CommunityPartition, Edge, GraphMetrics,
    Node, PathResult, Suggestion,
};
use super::paths;
use crate::error::Result;

// ============================================================================
// Trait
// ============================================================================

/// Analytics engine trait — single entry point for graph analytics.
///
/// Consumers hold `&dyn AnalyticsEngine` (or `Box<dyn AnalyticsEngine>`) so
/// hosts can substitute their own implementation.
pub trait AnalyticsEngine {
    /// Node id → neighbor ids for a snapshot, isolated nodes included.
    fn build_adjacency_list(
        &self,
        nodes: &[Node],
        edges: &[Edge],
    ) -> Result<HashMap<String, Vec<String>>>;

    /// Density, average degree and centrality; replaces the cached metrics.
    fn calculate_graph_metrics(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        cache: &mut ResultCache,
    ) -> Result<GraphMetrics>;

    /// Shortest and alternate paths between two node ids.
    fn find_paths_between(
        &self,
        source_id: &str,
        target_id: &str,
        nodes: &[Node],
        edges: &[Edge],
    ) -> Result<PathResult>;

    /// Community partition with its overall modularity; replaces the cached communities.
    fn detect_communities_with_modularity(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        cache: &mut ResultCache,
    ) -> Result<CommunityPartition>;

    /// Community list; replaces the cached communities.
    fn detect_communities(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        cache: &mut ResultCache,
    ) -> Result<Vec<Community>> {
        self.detect_communities_with_modularity(nodes, edges, cache)
            .map(|partition| partition.communities)
    }

    /// Structural and risk anomalies; replaces the cached anomalies.
    fn detect_anomalies(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        cache: &mut ResultCache,
    ) -> Result<Vec<Anomaly>>;

    /// Influence of `node` given its neighbors in `nodes`/`edges`.
    fn calculate_node_influence(&self, node: &Node, nodes: &[Node], edges: &[Edge])
        -> Result<f64>;

    /// Ranked connection candidates for `node`; `edges` adds a shared-neighbor signal.
    fn suggest_connections(
        &self,
        node: &Node,
        all_nodes: &[Node],
        edges: Option<&[Edge]>,
    ) -> Result<Vec<Suggestion>>;
}

// ============================================================================
// Concrete implementation
// ============================================================================

/// Default analytics engine, parameterized by an [`AnalyticsConfig`].
#[derive(Debug, Clone, Default)]
pub struct GraphAnalyticsEngine {
    config: AnalyticsConfig,
}

impl GraphAnalyticsEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }
}

impl AnalyticsEngine for GraphAnalyticsEngine {
    fn build_adjacency_list(
        &self,
        nodes: &[Node],
        edges: &[Edge],
    ) -> Result<HashMap<String, Vec<String>>> {
        validate_input(nodes, edges)?;
        Ok(GraphIndex::build(nodes, edges).to_adjacency_map())
    }

    fn calculate_graph_metrics(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        cache: &mut ResultCache,
    ) -> Result<GraphMetrics> {
        validate_input(nodes, edges)?;
        let start = Instant::now();

        let index = GraphIndex::build(nodes, edges);
        let result = metrics::compute_metrics(&index);

        tracing::debug!(
            "Graph metrics: {} nodes, {} edges, density {:.4} in {}ms",
            result.node_count,
            result.edge_count,
            result.density,
            start.elapsed().as_millis()
        );
        cache.set_metrics(result.clone());
        Ok(result)
    }

    fn find_paths_between(
        &self,
        source_id: &str,
        target_id: &str,
        nodes: &[Node],
        edges: &[Edge],
    ) -> Result<PathResult> {
        validate_input(nodes, edges)?;
        let start = Instant::now();

        let index = GraphIndex::build(nodes, edges);
        let result = paths::find_paths(&index, source_id, target_id, &self.config);

        tracing::debug!(
            "Paths {} -> {}: shortest {:?}, {} total in {}ms",
            source_id,
            target_id,
            result.shortest_path_length,
            result.all_paths.len(),
            start.elapsed().as_millis()
        );
        Ok(result)
    }

    fn detect_communities_with_modularity(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        cache: &mut ResultCache,
    ) -> Result<CommunityPartition> {
        validate_input(nodes, edges)?;
        let start = Instant::now();

        let index = GraphIndex::build(nodes, edges);
        let partition = community::detect_communities(&index);

        tracing::debug!(
            "Community detection: {} communities in {}ms",
            partition.communities.len(),
            start.elapsed().as_millis()
        );
        cache.set_communities(partition.communities.clone());
        Ok(partition)
    }

    fn detect_anomalies(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        cache: &mut ResultCache,
    ) -> Result<Vec<Anomaly>> {
        validate_input(nodes, edges)?;
        let start = Instant::now();

        let index = GraphIndex::build(nodes, edges);
        let found = anomalies::detect_anomalies(&index, &self.config);

        tracing::debug!(
            "Anomaly detection: {} findings in {}ms",
            found.len(),
            start.elapsed().as_millis()
        );
        cache.set_anomalies(found.clone());
        Ok(found)
    }

    fn calculate_node_influence(
        &self,
        node: &Node,
        nodes: &[Node],
        edges: &[Edge],
    ) -> Result<f64> {
        validate_input(std::slice::from_ref(node), &[])?;
        validate_input(nodes, edges)?;

        let index = GraphIndex::build(nodes, edges);
        Ok(influence::node_influence(&index, node, &self.config))
    }

    fn suggest_connections(
        &self,
        node: &Node,
        all_nodes: &[Node],
        edges: Option<&[Edge]>,
    ) -> Result<Vec<Suggestion>> {
        validate_input(std::slice::from_ref(node), &[])?;
        validate_input(all_nodes, edges.unwrap_or(&[]))?;

        let index = edges.map(|edges| GraphIndex::build(all_nodes, edges));
        Ok(influence::suggest_connections(
            node,
            all_nodes,
            index.as_ref(),
            &self.config,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;
    use crate::graph::models::{AnomalyType, NodeType};
    use crate::test_helpers::{chain_graph, init_tracing, link, node, star_graph, two_cliques};

    fn sample() -> (Vec<Node>, Vec<Edge>) {
        let nodes = vec![
            node("a", NodeType::Domain, 0.8),
            node("b", NodeType::IpAddress, 0.6),
            node("c", NodeType::Email, 0.3),
        ];
        let edges = vec![link("a", "b", 0.9), link("b", "c", 0.5)];
        (nodes, edges)
    }

    #[test]
    fn test_compute_calls_fill_their_cache_slot() {
        init_tracing();
        let engine = GraphAnalyticsEngine::default();
        let (nodes, edges) = sample();
        let mut cache = ResultCache::new();

        let metrics = engine
            .calculate_graph_metrics(&nodes, &edges, &mut cache)
            .unwrap();
        assert_eq!(cache.metrics(), Some(&metrics));
        assert!(cache.communities().is_none());

        let communities = engine.detect_communities(&nodes, &edges, &mut cache).unwrap();
        assert_eq!(cache.communities(), Some(communities.as_slice()));

        let found = engine.detect_anomalies(&nodes, &edges, &mut cache).unwrap();
        assert_eq!(cache.anomalies(), Some(found.as_slice()));
    }

    #[test]
    fn test_invalid_input_leaves_cache_untouched() {
        let engine = GraphAnalyticsEngine::default();
        let (mut nodes, edges) = sample();
        nodes.push(node("a", NodeType::Phone, 0.1));
        let mut cache = ResultCache::new();

        let err = engine
            .calculate_graph_metrics(&nodes, &edges, &mut cache)
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::DuplicateNodeId(_)));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_influence_rejects_out_of_range_subject() {
        let engine = GraphAnalyticsEngine::default();
        let (nodes, edges) = sample();
        let bad = node("x", NodeType::Domain, 2.0);
        assert!(engine.calculate_node_influence(&bad, &nodes, &edges).is_err());
    }

    #[test]
    fn test_engine_respects_config() {
        let engine = GraphAnalyticsEngine::new(AnalyticsConfig {
            max_suggestions: 1,
            ..AnalyticsConfig::default()
        });
        let (nodes, edges) = sample();
        let suggestions = engine
            .suggest_connections(&nodes[0], &nodes, Some(&edges))
            .unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(engine.config().max_suggestions, 1);
    }

    #[test]
    fn test_engine_usable_as_trait_object() {
        let engine: Box<dyn AnalyticsEngine> = Box::new(GraphAnalyticsEngine::default());
        let (nodes, edges) = sample();
        let adjacency = engine.build_adjacency_list(&nodes, &edges).unwrap();
        assert_eq!(adjacency.len(), 3);
        assert_eq!(adjacency["b"].len(), 2);
    }

    #[test]
    fn test_chain_paths_through_engine() {
        let engine = GraphAnalyticsEngine::default();
        let (nodes, edges) = chain_graph(5);
        let result = engine
            .find_paths_between("n0", "n4", &nodes, &edges)
            .unwrap();
        assert_eq!(result.shortest_path_length, Some(4));
        assert_eq!(result.all_paths.len(), 1);
    }

    #[test]
    fn test_two_cliques_split_into_two_communities() {
        let engine = GraphAnalyticsEngine::default();
        let (nodes, edges) = two_cliques();
        let mut cache = ResultCache::new();
        let partition = engine
            .detect_communities_with_modularity(&nodes, &edges, &mut cache)
            .unwrap();
        assert_eq!(partition.communities.len(), 2);
        assert!(partition.modularity > 0.3, "modularity {}", partition.modularity);
        assert_eq!(cache.communities().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_star_center_is_hub() {
        let engine = GraphAnalyticsEngine::default();
        let (nodes, edges) = star_graph(12);
        let mut cache = ResultCache::new();
        let found = engine.detect_anomalies(&nodes, &edges, &mut cache).unwrap();
        assert!(found
            .iter()
            .any(|a| a.anomaly_type == AnomalyType::HubOutlier && a.node_ids == ["center"]));
    }
}
