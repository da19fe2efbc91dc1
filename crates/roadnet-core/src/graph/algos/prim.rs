//! Prim minimum spanning tree

use crate::graph::algos::shared::start_exists;
use crate::graph::types::{Edge, MinimumSpanningTree};
use crate::graph::GraphProvider;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

/// Candidate edge in the frontier, ordered by weight then push order
struct Candidate<'a> {
    edge: &'a Edge,
    sequence: u64,
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.edge
            .weight
            .total_cmp(&other.edge.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

#[derive(Default)]
struct Frontier<'a> {
    heap: BinaryHeap<Reverse<Candidate<'a>>>,
    pushes: u64,
}

impl<'a> Frontier<'a> {
    /// Queue every edge of `edges` that leads outside the tree
    fn extend(&mut self, edges: &'a [Edge], in_tree: &HashSet<&str>) {
        for edge in edges {
            if in_tree.contains(edge.to.as_str()) {
                continue;
            }
            self.heap.push(Reverse(Candidate {
                edge,
                sequence: self.pushes,
            }));
            self.pushes += 1;
        }
    }

    fn pop(&mut self) -> Option<&'a Edge> {
        self.heap.pop().map(|Reverse(candidate)| candidate.edge)
    }
}

/// Minimum spanning tree of the component containing `start`.
///
/// Grows the tree one edge at a time, always taking the lightest edge that
/// leaves it; equal weights are taken in the order they were discovered.
/// Edges are recorded in acceptance order. Nodes outside the start's component
/// are never reached, so a disconnected graph yields a partial tree. An
/// unknown start yields an empty tree.
#[tracing::instrument(skip_all, fields(start = %start))]
pub fn prim_minimum_spanning_tree(provider: &dyn GraphProvider, start: &str) -> MinimumSpanningTree {
    let mut tree = MinimumSpanningTree::empty();
    if !start_exists(provider, start) {
        return tree;
    }

    let mut in_tree: HashSet<&str> = HashSet::new();
    let mut frontier = Frontier::default();

    in_tree.insert(start);
    frontier.extend(provider.outbound_edges(start), &in_tree);

    let node_count = provider.node_count();
    while in_tree.len() < node_count {
        let Some(edge) = frontier.pop() else {
            break;
        };
        if !in_tree.insert(edge.to.as_str()) {
            continue;
        }
        tree.accept(edge);
        frontier.extend(provider.outbound_edges(&edge.to), &in_tree);
    }

    tracing::debug!(
        spanned = in_tree.len(),
        edges = tree.edges.len(),
        total_weight = tree.total_weight,
        "prim_complete"
    );
    tree
}
