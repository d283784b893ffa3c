//! Path finder — shortest path plus bounded enumeration of alternates.
//!
//! Both searches walk the index's traversal arcs. With the default undirected
//! edges those are exactly the neighbor sets; an edge flagged
//! `bidirectional: false` is only walked source → target by both searches, so
//! the shortest path is always a member of the enumerated set.
//!
//! Enumeration is bounded two ways: a path may be at most
//! `max_extra_path_hops` longer than the shortest one, and at most
//! `max_paths` paths are returned (the shortest counts towards the cap).
//! The DFS never enters a node whose distance to the target already exceeds
//! the remaining hop budget, so dead-end branches in dense regions are cut
//! before they are expanded.

use std::collections::VecDeque;

use super::index::GraphIndex;
use super::models::{AnalyticsConfig, PathResult};

/// Find the shortest path and alternate simple paths between two node ids.
///
/// Unknown ids and disconnected pairs yield [`PathResult::empty`].
pub fn find_paths(
    index: &GraphIndex<'_>,
    source_id: &str,
    target_id: &str,
    config: &AnalyticsConfig,
) -> PathResult {
    let (Some(source), Some(target)) = (index.index_of(source_id), index.index_of(target_id))
    else {
        return PathResult::empty();
    };

    if source == target {
        let path = vec![source_id.to_string()];
        return PathResult {
            shortest_path: path.clone(),
            shortest_path_length: Some(0),
            all_paths: vec![path],
        };
    }

    let Some(shortest) = shortest_path(index, source, target) else {
        return PathResult::empty();
    };
    let shortest_len = shortest.len() - 1;

    let max_hops = shortest_len + config.max_extra_path_hops;
    let limit = config.max_paths.max(1);
    let mut paths = vec![shortest.clone()];
    paths.extend(enumerate_simple_paths(
        index,
        source,
        target,
        max_hops,
        limit - 1,
        &shortest,
    ));
    paths.sort_by_key(|p| p.len());

    PathResult {
        shortest_path: to_ids(index, &shortest),
        shortest_path_length: Some(shortest_len),
        all_paths: paths.iter().map(|p| to_ids(index, p)).collect(),
    }
}

fn to_ids(index: &GraphIndex<'_>, path: &[usize]) -> Vec<String> {
    path.iter().map(|&i| index.node(i).id.clone()).collect()
}

/// BFS from `source`; neighbors are expanded in insertion order so ties
/// resolve to the earliest-linked route.
fn shortest_path(index: &GraphIndex<'_>, source: usize, target: usize) -> Option<Vec<usize>> {
    let mut parent: Vec<Option<usize>> = vec![None; index.node_count()];
    let mut visited = vec![false; index.node_count()];
    let mut queue = VecDeque::new();
    visited[source] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            break;
        }
        for &next in index.arcs(current) {
            if !visited[next] {
                visited[next] = true;
                parent[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    if !visited[target] {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(p) = parent[current] {
        path.push(p);
        current = p;
    }
    path.reverse();
    Some(path)
}

/// Hop distance from every node to `target` along the traversal arcs.
///
/// BFS from `target` over reversed arcs; `None` means the target is
/// unreachable from that node.
fn distances_to(index: &GraphIndex<'_>, target: usize) -> Vec<Option<usize>> {
    let n = index.node_count();
    let mut reverse: Vec<Vec<usize>> = vec![Vec::new(); n];
    for from in 0..n {
        for &to in index.arcs(from) {
            reverse[to].push(from);
        }
    }

    let mut dist = vec![None; n];
    let mut queue = VecDeque::new();
    dist[target] = Some(0);
    queue.push_back(target);
    while let Some(current) = queue.pop_front() {
        let d = dist[current].unwrap_or(0);
        for &prev in &reverse[current] {
            if dist[prev].is_none() {
                dist[prev] = Some(d + 1);
                queue.push_back(prev);
            }
        }
    }
    dist
}

/// Iterative DFS over simple paths of at most `max_hops` edges.
///
/// `stack[d]` is the cursor into the arcs of `path[d]`; both always have the
/// same length. A step into `next` is only taken when `next` can still reach
/// the target within the remaining budget. The shortest path is skipped since
/// the caller seeds it.
fn enumerate_simple_paths(
    index: &GraphIndex<'_>,
    source: usize,
    target: usize,
    max_hops: usize,
    limit: usize,
    shortest: &[usize],
) -> Vec<Vec<usize>> {
    let mut found = Vec::new();
    if limit == 0 {
        return found;
    }

    let to_target = distances_to(index, target);
    let mut on_path = vec![false; index.node_count()];
    let mut path = vec![source];
    let mut stack = vec![0usize];
    on_path[source] = true;

    while let Some(&cursor) = stack.last() {
        let depth = stack.len() - 1;
        let arcs = index.arcs(path[depth]);

        if cursor >= arcs.len() || depth >= max_hops {
            stack.pop();
            if let Some(last) = path.pop() {
                on_path[last] = false;
            }
            continue;
        }

        let next = arcs[cursor];
        stack[depth] += 1;
        if on_path[next] {
            continue;
        }
        match to_target[next] {
            Some(remaining) if depth + 1 + remaining <= max_hops => {}
            _ => continue,
        }

        if next == target {
            let mut candidate = path.clone();
            candidate.push(target);
            if candidate != shortest {
                found.push(candidate);
                if found.len() >= limit {
                    break;
                }
            }
            continue;
        }

        path.push(next);
        stack.push(0);
        on_path[next] = true;
    }

    found
}
