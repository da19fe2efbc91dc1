use crate::graph::algos::shared::start_exists;
use crate::graph::types::TraversalResult;
use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};

/// Breadth-first traversal from `start`.
///
/// Nodes are marked visited when enqueued, so the first edge that reaches a
/// node is the one recorded in the spanning tree. Neighbors are explored in
/// edge insertion order. An unknown start yields an empty result.
#[tracing::instrument(skip_all, fields(start = %start))]
pub fn bfs_traverse(provider: &dyn GraphProvider, start: &str) -> TraversalResult {
    if !start_exists(provider, start) {
        return TraversalResult::empty(start);
    }

    let mut result = TraversalResult::empty(start);
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        result.visit_order.push(current.to_string());

        for edge in provider.outbound_edges(current) {
            if visited.insert(edge.to.as_str()) {
                queue.push_back(edge.to.as_str());
                result.tree_edges.push(edge.clone());
            }
        }
    }

    tracing::debug!(
        visited = result.visit_order.len(),
        tree_edges = result.tree_edges.len(),
        "bfs_complete"
    );
    result
}
