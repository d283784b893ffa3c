//! Influence and similarity scoring.
//!
//! - [`node_influence`] blends a node's own risk with the confidence-weighted
//!   mean risk of its direct neighbors.
//! - [`suggest_connections`] ranks other nodes by type, risk proximity and,
//!   when an index is available, shared neighbors.

use std::collections::HashSet;

use super::index::GraphIndex;
use super::models::{AnalyticsConfig, Node, Suggestion};

// Similarity component weights (sum to 1.0)
const SAME_TYPE_WEIGHT: f64 = 0.5;
const RISK_SCORE_WEIGHT: f64 = 0.25;
const RISK_LEVEL_WEIGHT: f64 = 0.1;
const SHARED_NEIGHBOR_WEIGHT: f64 = 0.15;

/// Risk scores closer than this are called out in the suggestion reason.
const SIMILAR_RISK_DELTA: f64 = 0.1;

/// Influence score in [0, 1].
///
/// `self_weight * own_risk + (1 - self_weight) * Σ(conf · risk) / Σ conf`
/// over every resolved edge touching the node. Nodes without neighbors (or
/// whose links all carry zero confidence) fall back to their own risk.
pub fn node_influence(index: &GraphIndex<'_>, node: &Node, config: &AnalyticsConfig) -> f64 {
    let own = node.risk_score;
    let Some(idx) = index.index_of(&node.id) else {
        return own.clamp(0.0, 1.0);
    };

    let (weighted, total_confidence) = index
        .links(idx)
        .iter()
        .fold((0.0, 0.0), |(w, c), &(j, confidence)| {
            (w + confidence * index.node(j).risk_score, c + confidence)
        });

    if total_confidence <= 0.0 {
        return own.clamp(0.0, 1.0);
    }

    let self_weight = config.influence_self_weight.clamp(0.0, 1.0);
    let neighborhood = weighted / total_confidence;
    (self_weight * own + (1.0 - self_weight) * neighborhood).clamp(0.0, 1.0)
}

/// Rank candidate connections for `node`, most similar first.
///
/// `node` itself is never suggested. At most `config.max_suggestions`
/// entries are returned; candidates with zero similarity are skipped.
pub fn suggest_connections(
    node: &Node,
    all_nodes: &[Node],
    index: Option<&GraphIndex<'_>>,
    config: &AnalyticsConfig,
) -> Vec<Suggestion> {
    let own_neighbors: Option<HashSet<usize>> = index.and_then(|idx| {
        idx.index_of(&node.id)
            .map(|i| idx.neighbors(i).iter().copied().collect())
    });

    let mut suggestions: Vec<Suggestion> = all_nodes
        .iter()
        .filter(|candidate| candidate.id != node.id)
        .filter_map(|candidate| {
            let shared = match (index, own_neighbors.as_ref()) {
                (Some(idx), Some(mine)) => shared_neighbors(idx, mine, candidate),
                _ => None,
            };
            let (similarity, reason) = score_candidate(node, candidate, shared);
            (similarity > 0.0).then(|| Suggestion {
                node: candidate.clone(),
                similarity,
                reason,
            })
        })
        .collect();

    suggestions.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then_with(|| a.node.id.cmp(&b.node.id))
    });
    suggestions.truncate(config.max_suggestions);
    suggestions
}

/// `(shared count, jaccard)` between `mine` and the candidate's neighbors.
fn shared_neighbors(
    index: &GraphIndex<'_>,
    mine: &HashSet<usize>,
    candidate: &Node,
) -> Option<(usize, f64)> {
    let theirs: HashSet<usize> = index
        .neighbors(index.index_of(&candidate.id)?)
        .iter()
        .copied()
        .collect();
    let shared = mine.intersection(&theirs).count();
    let union = mine.union(&theirs).count();
    let jaccard = if union > 0 {
        shared as f64 / union as f64
    } else {
        0.0
    };
    Some((shared, jaccard))
}

fn score_candidate(node: &Node, candidate: &Node, shared: Option<(usize, f64)>) -> (f64, String) {
    let mut reasons = Vec::new();
    let mut similarity = 0.0;

    if node.node_type == candidate.node_type {
        similarity += SAME_TYPE_WEIGHT;
        reasons.push(format!("same type ({})", node.node_type));
    }

    let risk_delta = (node.risk_score - candidate.risk_score).abs().min(1.0);
    similarity += RISK_SCORE_WEIGHT * (1.0 - risk_delta);
    if risk_delta <= SIMILAR_RISK_DELTA {
        reasons.push(format!(
            "similar risk ({:.2} vs {:.2})",
            node.risk_score, candidate.risk_score
        ));
    }

    let level_delta = node.risk_level.rank().abs_diff(candidate.risk_level.rank());
    similarity += RISK_LEVEL_WEIGHT * (1.0 - f64::from(level_delta) / 4.0);
    if level_delta == 0 {
        reasons.push(format!("same risk level ({})", node.risk_level));
    }

    if let Some((count, jaccard)) = shared {
        similarity += SHARED_NEIGHBOR_WEIGHT * jaccard;
        if count > 0 {
            let plural = if count == 1 { "" } else { "s" };
            reasons.push(format!("{} shared neighbor{}", count, plural));
        }
    }

    let reason = if reasons.is_empty() {
        "comparable risk profile".to_string()
    } else {
        reasons.join(", ")
    };
    (similarity.clamp(0.0, 1.0), reason)
}
