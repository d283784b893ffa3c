//! Test helper factories
//!
//! Provides tracing setup for tests and small graph builders with sensible
//! defaults (chain, star, two cliques joined by a bridge).
#![allow(dead_code)]

use crate::graph::models::{Edge, Node, NodeType};

/// Install a test-writer tracing subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("recon_graph_analytics=debug")
        .with_test_writer()
        .try_init();
}

/// Create a node with a risk level derived from its score.
pub fn node(id: &str, node_type: NodeType, risk_score: f64) -> Node {
    Node::new(id, node_type, risk_score)
}

/// Create an undirected edge `source -- target` with id `source-target`.
pub fn link(source: &str, target: &str, confidence: f64) -> Edge {
    Edge::new(
        format!("{}-{}", source, target),
        source,
        target,
        "RELATED_TO",
        confidence,
    )
}

/// `n0 -- n1 -- ... -- n{len-1}`
pub fn chain_graph(len: usize) -> (Vec<Node>, Vec<Edge>) {
    let nodes: Vec<Node> = (0..len)
        .map(|i| node(&format!("n{}", i), NodeType::Domain, 0.1))
        .collect();
    let edges: Vec<Edge> = (1..len)
        .map(|i| link(&format!("n{}", i - 1), &format!("n{}", i), 0.5))
        .collect();
    (nodes, edges)
}

/// `center` joined to `leaves` leaf nodes.
pub fn star_graph(leaves: usize) -> (Vec<Node>, Vec<Edge>) {
    let mut nodes = vec![node("center", NodeType::IpAddress, 0.3)];
    let mut edges = Vec::with_capacity(leaves);
    for i in 0..leaves {
        let id = format!("leaf{}", i);
        nodes.push(node(&id, NodeType::Domain, 0.1));
        edges.push(link("center", &id, 0.5));
    }
    (nodes, edges)
}

/// Two triangles `a0 a1 a2` and `b0 b1 b2` joined by the bridge `a0 -- b0`.
pub fn two_cliques() -> (Vec<Node>, Vec<Edge>) {
    let ids = ["a0", "a1", "a2", "b0", "b1", "b2"];
    let nodes = ids
        .iter()
        .map(|id| node(id, NodeType::Person, 0.2))
        .collect();
    let edges = vec![
        link("a0", "a1", 0.9),
        link("a1", "a2", 0.9),
        link("a0", "a2", 0.9),
        link("b0", "b1", 0.9),
        link("b1", "b2", 0.9),
        link("b0", "b2", 0.9),
        link("a0", "b0", 0.4),
    ];
    (nodes, edges)
}
