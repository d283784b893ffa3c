//! Graph index — adjacency structure built once per analytics call.
//!
//! Nodes are addressed by their position in the supplied slice, so index `i`
//! always refers to `nodes[i]`. The index keeps three views of the edge set:
//!
//! - **neighbors**: undirected, deduplicated neighbor sets in insertion order
//!   (metrics, communities, anomalies, shortest-path tie-breaking)
//! - **arcs**: directed traversal lists for the path finder; an edge is walked
//!   target → source only when it is not explicitly one-way
//! - **links**: every resolved edge occurrence with its confidence (influence)
//!
//! A petgraph `UnGraph` mirrors the neighbor sets for algorithms delegated to
//! `rustworkx-core`.

use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::{HashMap, HashSet};

use super::models::{Edge, Node};

/// Adjacency index over one node/edge snapshot.
#[derive(Debug, Clone)]
pub struct GraphIndex<'a> {
    nodes: &'a [Node],
    graph: UnGraph<(), f64>,
    id_to_index: HashMap<&'a str, usize>,
    neighbors: Vec<Vec<usize>>,
    arcs: Vec<Vec<usize>>,
    links: Vec<Vec<(usize, f64)>>,
    edge_count: usize,
    dropped_edges: usize,
}

impl<'a> GraphIndex<'a> {
    /// Build the index in O(|V| + |E|).
    ///
    /// Edges whose source or target is not a known node id are dropped.
    /// Self-loops count towards `edge_count` but never make a node its own
    /// neighbor.
    pub fn build(nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        let n = nodes.len();
        let mut graph = UnGraph::with_capacity(n, edges.len());
        let mut id_to_index = HashMap::with_capacity(n);
        for (i, node) in nodes.iter().enumerate() {
            graph.add_node(());
            id_to_index.entry(node.id.as_str()).or_insert(i);
        }

        let mut neighbors = vec![Vec::new(); n];
        let mut arcs = vec![Vec::new(); n];
        let mut links = vec![Vec::new(); n];
        let mut seen_pairs: HashSet<(usize, usize)> = HashSet::new();
        let mut seen_arcs: HashSet<(usize, usize)> = HashSet::new();
        let mut edge_count = 0;
        let mut dropped_edges = 0;

        for edge in edges {
            let (Some(&s), Some(&t)) = (
                id_to_index.get(edge.source.as_str()),
                id_to_index.get(edge.target.as_str()),
            ) else {
                dropped_edges += 1;
                continue;
            };
            edge_count += 1;
            if s == t {
                continue;
            }

            links[s].push((t, edge.confidence));
            links[t].push((s, edge.confidence));

            if seen_pairs.insert((s.min(t), s.max(t))) {
                neighbors[s].push(t);
                neighbors[t].push(s);
                graph.add_edge(NodeIndex::new(s), NodeIndex::new(t), edge.confidence);
            }

            if seen_arcs.insert((s, t)) {
                arcs[s].push(t);
            }
            if edge.traversable_backwards() && seen_arcs.insert((t, s)) {
                arcs[t].push(s);
            }
        }

        if dropped_edges > 0 {
            tracing::debug!(
                "Graph index dropped {} edge(s) with unknown endpoints",
                dropped_edges
            );
        }
        tracing::debug!(
            "Built graph index: {} nodes, {} edges ({} distinct links)",
            n,
            edge_count,
            seen_pairs.len()
        );

        Self {
            nodes,
            graph,
            id_to_index,
            neighbors,
            arcs,
            links,
            edge_count,
            dropped_edges,
        }
    }

    /// Number of indexed nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges whose endpoints both resolved.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of edges dropped for referencing unknown nodes.
    pub fn dropped_edge_count(&self) -> usize {
        self.dropped_edges
    }

    /// Number of distinct undirected node pairs joined by at least one edge.
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The node at position `idx`.
    pub fn node(&self, idx: usize) -> &'a Node {
        &self.nodes[idx]
    }

    /// All nodes in index order.
    pub fn nodes(&self) -> &'a [Node] {
        self.nodes
    }

    /// Position of a node id, if known.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.id_to_index.get(id).copied()
    }

    /// Undirected neighbor set, in the order neighbors were first linked.
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.neighbors[idx]
    }

    /// Number of distinct neighbors.
    pub fn degree(&self, idx: usize) -> usize {
        self.neighbors[idx].len()
    }

    /// Nodes reachable in one step by the path finder.
    pub fn arcs(&self, idx: usize) -> &[usize] {
        &self.arcs[idx]
    }

    /// Every resolved edge touching `idx` as `(other, confidence)`.
    pub fn links(&self, idx: usize) -> &[(usize, f64)] {
        &self.links[idx]
    }

    /// The undirected petgraph mirror of the neighbor sets.
    pub fn graph(&self) -> &UnGraph<(), f64> {
        &self.graph
    }

    /// Export the neighbor sets keyed by node id.
    pub fn to_adjacency_map(&self) -> HashMap<String, Vec<String>> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let ids = self.neighbors[i]
                    .iter()
                    .map(|&j| self.nodes[j].id.clone())
                    .collect();
                (node.id.clone(), ids)
            })
            .collect()
    }
}

/// Build the node id → neighbor ids mapping for a snapshot.
///
/// Every node gets an entry, isolated nodes map to an empty list.
pub fn build_adjacency_list(nodes: &[Node], edges: &[Edge]) -> HashMap<String, Vec<String>> {
    GraphIndex::build(nodes, edges).to_adjacency_map()
}
