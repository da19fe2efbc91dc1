use crate::graph::types::Edge;

/// Trait for providing read-only graph adjacency to the algorithms
pub trait GraphProvider {
    /// Node ids in the provider's iteration order
    fn node_ids(&self) -> Vec<&str>;

    fn contains_node(&self, id: &str) -> bool;

    /// Outgoing edges of `id` in insertion order, empty for unknown ids
    fn outbound_edges(&self, id: &str) -> &[Edge];

    fn node_count(&self) -> usize {
        self.node_ids().len()
    }

    /// Every edge, concatenating the per-node lists in node order
    fn all_edges(&self) -> Vec<&Edge> {
        self.node_ids()
            .into_iter()
            .flat_map(|id| self.outbound_edges(id).iter())
            .collect()
    }
}
