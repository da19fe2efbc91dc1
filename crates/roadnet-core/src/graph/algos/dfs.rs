use crate::graph::algos::shared::start_exists;
use crate::graph::types::TraversalResult;
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// A node on the DFS stack and the index of its next unexplored edge
struct Frame<'a> {
    node_id: &'a str,
    next_edge: usize,
}

/// Depth-first, pre-order traversal from `start`.
///
/// Produces the same order as the recursive formulation (mark on entry, then
/// descend into each unvisited neighbor in edge insertion order) but keeps an
/// explicit stack so deep graphs cannot overflow the call stack.
#[tracing::instrument(skip_all, fields(start = %start))]
pub fn dfs_traverse(provider: &dyn GraphProvider, start: &str) -> TraversalResult {
    if !start_exists(provider, start) {
        return TraversalResult::empty(start);
    }

    let mut result = TraversalResult::empty(start);
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![Frame {
        node_id: start,
        next_edge: 0,
    }];

    visited.insert(start);
    result.visit_order.push(start.to_string());

    while let Some(frame) = stack.last_mut() {
        let edges = provider.outbound_edges(frame.node_id);
        let Some(edge) = edges.get(frame.next_edge) else {
            stack.pop();
            continue;
        };
        frame.next_edge += 1;

        if visited.insert(edge.to.as_str()) {
            result.visit_order.push(edge.to.clone());
            result.tree_edges.push(edge.clone());
            stack.push(Frame {
                node_id: edge.to.as_str(),
                next_edge: 0,
            });
        }
    }

    tracing::debug!(
        visited = result.visit_order.len(),
        tree_edges = result.tree_edges.len(),
        "dfs_complete"
    );
    result
}
