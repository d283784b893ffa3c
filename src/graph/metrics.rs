//! Connectivity metrics and centrality.
//!
//! All measures run on the undirected neighbor sets of a [`GraphIndex`]:
//! - **Density / average degree** — closed-form from node and edge counts
//! - **Degree centrality** — neighbor count / (n - 1)
//! - **Betweenness centrality** — Brandes, via `rustworkx_core::centrality::betweenness_centrality`
//! - **Closeness centrality** — unweighted BFS from every node, component-local
//! - **Connected components** — BFS labelling
//! - **Clustering coefficient** — closed neighbor pairs / possible pairs
//!
//! Every division that could hit zero on tiny graphs is special-cased to 0.

use petgraph::graph::NodeIndex;
use std::collections::{HashMap, VecDeque};

use super::index::GraphIndex;
use super::models::{CentralityScores, GraphMetrics};

// ============================================================================
// Orchestrator
// ============================================================================

/// Compute every global metric and centrality measure for the index.
pub fn compute_metrics(index: &GraphIndex<'_>) -> GraphMetrics {
    let n = index.node_count();
    let edge_count = index.edge_count();

    let centrality = CentralityScores {
        degree: degree_centrality(index),
        betweenness: betweenness_centrality(index),
        closeness: closeness_centrality(index),
    };

    let component_sizes = connected_component_sizes(index);
    let clustering = clustering_coefficient(index);
    let avg_clustering = if n > 0 {
        clustering.iter().sum::<f64>() / n as f64
    } else {
        0.0
    };

    GraphMetrics {
        node_count: n,
        edge_count,
        density: density(n, edge_count),
        avg_degree: avg_degree(n, edge_count),
        centrality,
        component_count: component_sizes.len(),
        largest_component_size: component_sizes.iter().copied().max().unwrap_or(0),
        avg_clustering,
    }
}

// ============================================================================
// Global measures
// ============================================================================

/// `edges / (n (n - 1) / 2)`, clamped to 1 for multigraphs, 0 below two nodes.
pub fn density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    let possible = (node_count * (node_count - 1)) as f64 / 2.0;
    (edge_count as f64 / possible).min(1.0)
}

/// `2 * edges / n`, 0 for an empty graph.
pub fn avg_degree(node_count: usize, edge_count: usize) -> f64 {
    if node_count == 0 {
        return 0.0;
    }
    (2 * edge_count) as f64 / node_count as f64
}

// ============================================================================
// Centrality
// ============================================================================

/// Degree centrality: distinct neighbors / (n - 1).
pub fn degree_centrality(index: &GraphIndex<'_>) -> HashMap<String, f64> {
    let n = index.node_count();
    (0..n)
        .map(|i| {
            let score = if n > 1 {
                index.degree(i) as f64 / (n - 1) as f64
            } else {
                0.0
            };
            (index.node(i).id.clone(), score)
        })
        .collect()
}

/// Betweenness centrality normalized by `(n - 1)(n - 2)`.
///
/// Delegates to rustworkx-core's Brandes implementation on the undirected
/// mirror graph; ties between equal-length paths split credit equally.
pub fn betweenness_centrality(index: &GraphIndex<'_>) -> HashMap<String, f64> {
    let n = index.node_count();
    if n <= 2 {
        return (0..n).map(|i| (index.node(i).id.clone(), 0.0)).collect();
    }

    let scores = rustworkx_core::centrality::betweenness_centrality(
        index.graph(),
        false, // include_endpoints
        true,  // normalized
        200,   // parallel_threshold (sequential for small graphs)
    );

    (0..n)
        .map(|i| {
            let score = scores.get(i).copied().flatten().unwrap_or(0.0);
            (index.node(i).id.clone(), score.clamp(0.0, 1.0))
        })
        .collect()
}

/// Closeness centrality: `(reachable - 1) / Σ distance`, restricted to the
/// node's own component. Nodes that reach nothing score 0.
pub fn closeness_centrality(index: &GraphIndex<'_>) -> HashMap<String, f64> {
    let n = index.node_count();
    let mut result = HashMap::with_capacity(n);
    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut queue = VecDeque::new();

    for start in 0..n {
        dist.iter_mut().for_each(|d| *d = None);
        dist[start] = Some(0);
        queue.push_back(start);

        let mut reachable = 0usize;
        let mut total = 0usize;
        while let Some(current) = queue.pop_front() {
            let d = dist[current].unwrap_or(0);
            reachable += 1;
            total += d;
            for &next in index.neighbors(current) {
                if dist[next].is_none() {
                    dist[next] = Some(d + 1);
                    queue.push_back(next);
                }
            }
        }

        let score = if total > 0 {
            (reachable - 1) as f64 / total as f64
        } else {
            0.0
        };
        result.insert(index.node(start).id.clone(), score);
    }

    result
}

// ============================================================================
// Structure
// ============================================================================

/// Sizes of the connected components, in discovery order.
pub fn connected_component_sizes(index: &GraphIndex<'_>) -> Vec<usize> {
    let n = index.node_count();
    let mut component_of: Vec<Option<usize>> = vec![None; n];
    let mut sizes = Vec::new();

    for start in 0..n {
        if component_of[start].is_some() {
            continue;
        }
        let component_id = sizes.len();
        let mut size = 0;
        let mut queue = VecDeque::new();
        queue.push_back(start);
        component_of[start] = Some(component_id);

        while let Some(current) = queue.pop_front() {
            size += 1;
            for &neighbor in index.neighbors(current) {
                if component_of[neighbor].is_none() {
                    component_of[neighbor] = Some(component_id);
                    queue.push_back(neighbor);
                }
            }
        }
        sizes.push(size);
    }

    sizes
}

/// Local clustering coefficient per node index.
///
/// coefficient = closed neighbor pairs / (k (k - 1) / 2); 0 when k < 2.
pub fn clustering_coefficient(index: &GraphIndex<'_>) -> Vec<f64> {
    let g = index.graph();
    (0..index.node_count())
        .map(|i| {
            let neighbors = index.neighbors(i);
            let k = neighbors.len();
            if k < 2 {
                return 0.0;
            }
            let mut triangles = 0usize;
            for a in 0..k {
                for b in (a + 1)..k {
                    let na = NodeIndex::new(neighbors[a]);
                    let nb = NodeIndex::new(neighbors[b]);
                    if g.contains_edge(na, nb) {
                        triangles += 1;
                    }
                }
            }
            triangles as f64 / (k * (k - 1) / 2) as f64
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
