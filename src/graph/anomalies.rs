//! Anomaly detection — structural outliers and risk-correlated patterns.
//!
//! Rules, evaluated in this order:
//! - `ISOLATED_NODE` — no neighbors at all (LOW)
//! - `HUB_OUTLIER` — degree above `mean + k·σ` (MEDIUM, HIGH past the second threshold)
//! - `HIGH_RISK_CLUSTER` — a community whose mean risk crosses the cluster threshold (HIGH/CRITICAL)
//! - `SUSPICIOUS_CONNECTION` — a high-confidence link between a CRITICAL entity and an INFO/LOW one (MEDIUM)
//!
//! The output is sorted by severity, most severe first; rule order is kept
//! within a severity.

use std::collections::HashSet;

use super::community::detect_communities;
use super::index::GraphIndex;
use super::models::{AnalyticsConfig, Anomaly, AnomalyType, RiskLevel, Severity};

/// Run every anomaly rule against the index.
pub fn detect_anomalies(index: &GraphIndex<'_>, config: &AnalyticsConfig) -> Vec<Anomaly> {
    let mut anomalies = isolated_nodes(index);
    anomalies.extend(hub_outliers(index, config));
    anomalies.extend(high_risk_clusters(index, config));
    anomalies.extend(suspicious_connections(index, config));
    anomalies.sort_by(|a, b| b.severity.cmp(&a.severity));
    anomalies
}

fn isolated_nodes(index: &GraphIndex<'_>) -> Vec<Anomaly> {
    (0..index.node_count())
        .filter(|&i| index.degree(i) == 0)
        .map(|i| {
            let node = index.node(i);
            Anomaly {
                anomaly_type: AnomalyType::IsolatedNode,
                severity: Severity::Low,
                explanation: format!(
                    "{} '{}' has no relationships to any other entity",
                    node.node_type,
                    node.display_name()
                ),
                node_ids: vec![node.id.clone()],
            }
        })
        .collect()
}

fn hub_outliers(index: &GraphIndex<'_>, config: &AnalyticsConfig) -> Vec<Anomaly> {
    let n = index.node_count();
    if n == 0 {
        return vec![];
    }

    let degrees: Vec<f64> = (0..n).map(|i| index.degree(i) as f64).collect();
    let mean = degrees.iter().sum::<f64>() / n as f64;
    let variance = degrees.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n as f64;
    let stddev = variance.sqrt();
    if stddev == 0.0 {
        return vec![];
    }

    let threshold = mean + config.hub_stddev_factor * stddev;
    let high_threshold = mean + config.hub_high_stddev_factor * stddev;

    degrees
        .iter()
        .enumerate()
        .filter(|&(_, &d)| d > threshold)
        .map(|(i, &d)| {
            let node = index.node(i);
            let severity = if d > high_threshold {
                Severity::High
            } else {
                Severity::Medium
            };
            Anomaly {
                anomaly_type: AnomalyType::HubOutlier,
                severity,
                explanation: format!(
                    "{} '{}' has {} connections, {:.1} standard deviations above the mean degree of {:.2}",
                    node.node_type,
                    node.display_name(),
                    d as usize,
                    (d - mean) / stddev,
                    mean
                ),
                node_ids: vec![node.id.clone()],
            }
        })
        .collect()
}

fn high_risk_clusters(index: &GraphIndex<'_>, config: &AnalyticsConfig) -> Vec<Anomaly> {
    detect_communities(index)
        .communities
        .into_iter()
        .filter(|c| c.size >= config.min_cluster_size)
        .filter(|c| c.avg_risk_score >= config.high_risk_cluster_threshold)
        .map(|c| {
            let severity = if c.avg_risk_score >= config.critical_cluster_threshold {
                Severity::Critical
            } else {
                Severity::High
            };
            Anomaly {
                anomaly_type: AnomalyType::HighRiskCluster,
                severity,
                explanation: format!(
                    "Community {} ({}) groups {} entities with mean risk score {:.2}",
                    c.id, c.label, c.size, c.avg_risk_score
                ),
                node_ids: c.members,
            }
        })
        .collect()
}

fn suspicious_connections(index: &GraphIndex<'_>, config: &AnalyticsConfig) -> Vec<Anomaly> {
    let mut reported: HashSet<(usize, usize)> = HashSet::new();
    let mut anomalies = Vec::new();

    for i in 0..index.node_count() {
        let critical = index.node(i);
        if critical.risk_level != RiskLevel::Critical {
            continue;
        }
        for &(j, confidence) in index.links(i) {
            let other = index.node(j);
            if other.risk_level > RiskLevel::Low || confidence < config.suspicious_link_confidence {
                continue;
            }
            if !reported.insert((i, j)) {
                continue;
            }
            anomalies.push(Anomaly {
                anomaly_type: AnomalyType::SuspiciousConnection,
                severity: Severity::Medium,
                explanation: format!(
                    "{} {} '{}' is linked to CRITICAL {} '{}' with confidence {:.2}",
                    other.risk_level,
                    other.node_type,
                    other.display_name(),
                    critical.node_type,
                    critical.display_name(),
                    confidence
                ),
                node_ids: vec![critical.id.clone(), other.id.clone()],
            });
        }
    }

    anomalies
}
