use crate::graph::algos::shared::reconstruct_path;
use crate::graph::types::{PathResult, UNREACHABLE};
use crate::graph::GraphProvider;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then push order)
#[derive(Debug, Clone)]
pub struct HeapEntry<'a> {
    pub node_id: &'a str,
    pub distance: f64,
    pub sequence: u64,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// State tracked during a Dijkstra search
struct DijkstraState<'a> {
    distances: HashMap<&'a str, f64>,
    predecessors: HashMap<&'a str, &'a str>,
    finalized: HashSet<&'a str>,
    heap: BinaryHeap<Reverse<HeapEntry<'a>>>,
    pushes: u64,
}

impl<'a> DijkstraState<'a> {
    fn new(start: &'a str) -> Self {
        let mut state = Self {
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            finalized: HashSet::new(),
            heap: BinaryHeap::new(),
            pushes: 0,
        };
        state.distances.insert(start, 0.0);
        state.push(start, 0.0);
        state
    }

    fn distance(&self, node_id: &str) -> f64 {
        self.distances.get(node_id).copied().unwrap_or(UNREACHABLE)
    }

    fn push(&mut self, node_id: &'a str, distance: f64) {
        self.heap.push(Reverse(HeapEntry {
            node_id,
            distance,
            sequence: self.pushes,
        }));
        self.pushes += 1;
    }

    fn relax(&mut self, node_id: &'a str, via: &'a str, distance: f64) {
        self.distances.insert(node_id, distance);
        self.predecessors.insert(node_id, via);
        self.push(node_id, distance);
    }
}

/// Shortest path from `from` to `to` over non-negative edge weights.
///
/// The frontier has no decrease-key: improved distances are pushed again and
/// stale entries are skipped once their node is finalized. The search stops as
/// soon as `to` is finalized. Negative weights are not checked and give
/// undefined results.
///
/// An unknown endpoint or an unreachable target yields an empty path with an
/// infinite distance.
#[tracing::instrument(skip_all, fields(from = %from, to = %to))]
pub fn dijkstra_shortest_path(provider: &dyn GraphProvider, from: &str, to: &str) -> PathResult {
    if !provider.contains_node(from) || !provider.contains_node(to) {
        tracing::warn!(from, to, "start or end node not found");
        return PathResult::not_found(from, to);
    }

    let mut state = DijkstraState::new(from);

    while let Some(Reverse(HeapEntry { node_id: current, .. })) = state.heap.pop() {
        if !state.finalized.insert(current) {
            continue;
        }
        if current == to {
            break;
        }

        let current_distance = state.distance(current);
        for edge in provider.outbound_edges(current) {
            let neighbor = edge.to.as_str();
            if state.finalized.contains(neighbor) {
                continue;
            }
            let candidate = current_distance + edge.weight;
            if candidate < state.distance(neighbor) {
                state.relax(neighbor, current, candidate);
            }
        }
    }

    tracing::debug!(
        finalized = state.finalized.len(),
        pushes = state.pushes,
        "dijkstra_complete"
    );

    if from != to && !state.predecessors.contains_key(to) {
        return PathResult::not_found(from, to);
    }

    let path = reconstruct_path(from, to, provider.node_count(), |id| {
        state.predecessors.get(id).copied()
    });
    PathResult {
        from: from.to_string(),
        to: to.to_string(),
        path,
        distance: state.distance(to),
    }
}
