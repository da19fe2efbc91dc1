//! Kruskal minimum spanning forest

use crate::graph::algos::union_find::UnionFind;
use crate::graph::types::MinimumSpanningTree;
use crate::graph::GraphProvider;

/// Minimum spanning forest over every node of the graph.
///
/// Every directed edge is considered once, lightest first. Equal weights
/// keep their [`GraphProvider::all_edges`] order, so an undirected road is
/// accepted in whichever direction is listed first. An edge is accepted when
/// its endpoints lie in different sets; self-loops never are.
#[tracing::instrument(skip_all)]
pub fn kruskal_minimum_spanning_tree(provider: &dyn GraphProvider) -> MinimumSpanningTree {
    let mut edges = provider.all_edges();
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut sets = UnionFind::new(provider.node_ids());
    let mut tree = MinimumSpanningTree::empty();
    let limit = sets.len().saturating_sub(1);

    for edge in edges {
        if tree.edges.len() == limit {
            break;
        }
        if sets.union(&edge.from, &edge.to) {
            tree.accept(edge);
        }
    }

    tracing::debug!(
        edges = tree.edges.len(),
        components = sets.set_count(),
        total_weight = tree.total_weight,
        "kruskal_complete"
    );
    tree
}
