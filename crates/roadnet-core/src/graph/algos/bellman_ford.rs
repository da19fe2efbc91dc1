//! Bellman-Ford single-source shortest paths
//!
//! Tolerates negative edge weights and reports negative-weight cycles that are
//! reachable from the source instead of returning distances.

use crate::graph::algos::shared::start_exists;
use crate::graph::types::{BellmanFordOutcome, Edge, ShortestPathTree, UNREACHABLE};
use crate::graph::GraphProvider;
use std::collections::HashMap;

/// Candidate distance for `edge.to` if relaxing `edge` improves it.
///
/// Edges leaving an unreached node never relax.
fn relaxed_distance(distances: &HashMap<&str, f64>, edge: &Edge) -> Option<f64> {
    let from = distances.get(edge.from.as_str()).copied().unwrap_or(UNREACHABLE);
    if !from.is_finite() {
        return None;
    }
    let candidate = from + edge.weight;
    let current = distances.get(edge.to.as_str()).copied().unwrap_or(UNREACHABLE);
    (candidate < current).then_some(candidate)
}

/// Shortest distances from `source` to every node.
///
/// The full edge list is relaxed exactly `|V| - 1` times, then checked once
/// more: any further improvement means a negative cycle is reachable and the
/// outcome carries no distances. An unknown source yields an empty tree.
#[tracing::instrument(skip_all, fields(source = %source))]
pub fn bellman_ford_shortest_paths(provider: &dyn GraphProvider, source: &str) -> BellmanFordOutcome {
    if !start_exists(provider, source) {
        return BellmanFordOutcome::Resolved(ShortestPathTree::empty(source));
    }

    let node_ids = provider.node_ids();
    let edges = provider.all_edges();

    let mut distances: HashMap<&str, f64> = node_ids.iter().map(|&id| (id, UNREACHABLE)).collect();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    distances.insert(source, 0.0);

    for _ in 1..node_ids.len() {
        for edge in &edges {
            if let Some(candidate) = relaxed_distance(&distances, edge) {
                distances.insert(edge.to.as_str(), candidate);
                predecessors.insert(edge.to.as_str(), edge.from.as_str());
            }
        }
    }

    if let Some(edge) = edges.iter().find(|e| relaxed_distance(&distances, e).is_some()) {
        tracing::debug!(from = %edge.from, to = %edge.to, "negative_cycle_detected");
        return BellmanFordOutcome::NegativeCycle {
            source: source.to_string(),
        };
    }

    tracing::debug!(
        nodes = node_ids.len(),
        edges = edges.len(),
        reached = distances.values().filter(|d| d.is_finite()).count(),
        "bellman_ford_complete"
    );

    BellmanFordOutcome::Resolved(ShortestPathTree {
        source: source.to_string(),
        distances: distances
            .into_iter()
            .map(|(id, d)| (id.to_string(), d))
            .collect(),
        predecessors: predecessors
            .into_iter()
            .map(|(id, p)| (id.to_string(), p.to_string()))
            .collect(),
    })
}
