//! Community detection — greedy agglomerative modularity maximization.
//!
//! Every node starts in its own community. Each round merges the pair of
//! linked communities with the largest gain
//!
//! ```text
//! ΔQ = e_ij / 2m  -  d_i · d_j / (2m)²
//! ```
//!
//! where `e_ij` counts links between the two communities, `d_*` are summed
//! degrees and `m` is the number of distinct links. Merging stops once no pair
//! improves modularity or a single community remains. Only positive merges are
//! taken, so the final partition is the best one observed.
//!
//! Pairs are scanned in ascending community order through `BTreeMap`s, which
//! keeps tie-breaking (and therefore the whole partition) deterministic.

use std::collections::{BTreeMap, HashMap};

use super::index::GraphIndex;
use super::models::{Community, CommunityPartition, NodeType};

const MIN_GAIN: f64 = 1e-12;

/// Partition the index into communities.
///
/// Communities are ordered by size (largest first, ties by earliest member)
/// and numbered from 0 in that order. Isolated nodes form singletons.
pub fn detect_communities(index: &GraphIndex<'_>) -> CommunityPartition {
    let n = index.node_count();
    if n == 0 {
        return CommunityPartition::default();
    }

    let m = index.link_count() as f64;
    let m2 = 2.0 * m;

    // Community state, indexed by the id of the node that founded it
    let mut members: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
    let mut alive = vec![true; n];
    let mut total_degree: Vec<f64> = (0..n).map(|i| index.degree(i) as f64).collect();
    let mut internal: Vec<f64> = vec![0.0; n];
    let mut between: Vec<BTreeMap<usize, f64>> = vec![BTreeMap::new(); n];
    for (i, links) in between.iter_mut().enumerate() {
        for &j in index.neighbors(i) {
            *links.entry(j).or_default() += 1.0;
        }
    }

    let mut remaining = n;
    let mut merges = 0usize;
    while m > 0.0 && remaining > 1 {
        let mut best: Option<(usize, usize, f64)> = None;
        for (i, links) in between.iter().enumerate() {
            if !alive[i] {
                continue;
            }
            for (&j, &e_ij) in links.range(i + 1..) {
                let gain = e_ij / m2 - total_degree[i] * total_degree[j] / (m2 * m2);
                if gain > MIN_GAIN && best.map_or(true, |(_, _, g)| gain > g) {
                    best = Some((i, j, gain));
                }
            }
        }

        let Some((keep, absorb, _)) = best else {
            break;
        };

        // Fold `absorb` into `keep`
        let absorbed_links = std::mem::take(&mut between[absorb]);
        let e_kept = absorbed_links.get(&keep).copied().unwrap_or(0.0);
        internal[keep] += internal[absorb] + e_kept;
        total_degree[keep] += total_degree[absorb];
        between[keep].remove(&absorb);
        for (other, w) in absorbed_links {
            if other == keep {
                continue;
            }
            between[other].remove(&absorb);
            *between[other].entry(keep).or_default() += w;
            *between[keep].entry(other).or_default() += w;
        }
        let moved = std::mem::take(&mut members[absorb]);
        members[keep].extend(moved);
        alive[absorb] = false;
        remaining -= 1;
        merges += 1;
    }

    let mut groups: Vec<(Vec<usize>, f64, f64)> = (0..n)
        .filter(|&c| alive[c])
        .map(|c| {
            let mut group = std::mem::take(&mut members[c]);
            group.sort_unstable();
            (group, internal[c], total_degree[c])
        })
        .collect();
    groups.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0[0].cmp(&b.0[0])));

    let mut modularity = 0.0;
    let communities: Vec<Community> = groups
        .into_iter()
        .enumerate()
        .map(|(id, (group, links_inside, degree_sum))| {
            let q = if m > 0.0 {
                links_inside / m - (degree_sum / m2).powi(2)
            } else {
                0.0
            };
            modularity += q;
            build_community(index, id as u32, &group, q)
        })
        .collect();

    tracing::debug!(
        "Detected {} communities after {} merges (modularity {:.4})",
        communities.len(),
        merges,
        modularity
    );

    CommunityPartition {
        communities,
        modularity,
    }
}

fn build_community(index: &GraphIndex<'_>, id: u32, group: &[usize], q: f64) -> Community {
    let avg_risk_score =
        group.iter().map(|&i| index.node(i).risk_score).sum::<f64>() / group.len() as f64;
    Community {
        id,
        members: group.iter().map(|&i| index.node(i).id.clone()).collect(),
        size: group.len(),
        modularity: q.clamp(0.0, 1.0),
        color: community_color(id),
        label: community_label(index, group),
        avg_risk_score,
    }
}

/// Label a community by its dominant entity type.
///
/// Singletons use the member's display name. Ties between types go to the
/// type seen first.
fn community_label(index: &GraphIndex<'_>, group: &[usize]) -> String {
    if let [only] = group {
        return index.node(*only).display_name().to_string();
    }

    let mut counts: HashMap<NodeType, (usize, usize)> = HashMap::new();
    for (pos, &i) in group.iter().enumerate() {
        let entry = counts.entry(index.node(i).node_type).or_insert((0, pos));
        entry.0 += 1;
    }
    let dominant = counts
        .into_iter()
        .max_by(|a, b| a.1 .0.cmp(&b.1 .0).then_with(|| b.1 .1.cmp(&a.1 .1)))
        .map(|(node_type, _)| node_type);

    match dominant {
        Some(node_type) => format!("{} cluster", node_type),
        None => format!("group_{}", group.len()),
    }
}

// ============================================================================
// Display colors
// ============================================================================

/// Deterministic `#rrggbb` color for a community id.
///
/// The id is hashed (FNV-1a) onto a hue; saturation and lightness are fixed so
/// every community color has the same visual weight.
pub fn community_color(community_id: u32) -> String {
    let hue = (fnv1a(community_id.to_string().as_bytes()) % 360) as f64;
    let (r, g, b) = hsl_to_rgb(hue, 0.65, 0.55);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

/// HSL (hue in degrees, s/l in [0, 1]) to 8-bit RGB.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h % 360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let offset = l - c / 2.0;
    let channel = |v: f64| ((v + offset) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r1), channel(g1), channel(b1))
}

// ============================================================================
// Tests
// ============================================================================
