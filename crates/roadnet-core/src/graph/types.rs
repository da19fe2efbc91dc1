use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Distance reported for nodes that cannot be reached
pub const UNREACHABLE: f64 = f64::INFINITY;

/// A directed, weighted edge between two nodes of the same graph.
///
/// An undirected road is stored as two edges of equal weight, one per
/// direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}

/// BFS / DFS traversal result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalResult {
    pub start: String,
    /// Nodes in the order they were first discovered
    pub visit_order: Vec<String>,
    /// Edges used to discover each previously unvisited node
    pub tree_edges: Vec<Edge>,
}

impl TraversalResult {
    /// Result for a start node that is not in the graph
    pub fn empty(start: &str) -> Self {
        TraversalResult {
            start: start.to_string(),
            visit_order: Vec::new(),
            tree_edges: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.visit_order.is_empty()
    }
}

/// Single-target shortest path result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    /// Nodes from `from` to `to`, empty when no path exists
    pub path: Vec<String>,
    /// Total path weight, [`UNREACHABLE`] when no path exists
    pub distance: f64,
}

impl PathResult {
    /// Result for an unreachable target or an unknown endpoint
    pub fn not_found(from: &str, to: &str) -> Self {
        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            path: Vec::new(),
            distance: UNREACHABLE,
        }
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Distances and predecessors from a single source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathTree {
    pub source: String,
    pub distances: BTreeMap<String, f64>,
    pub predecessors: BTreeMap<String, String>,
}

impl ShortestPathTree {
    /// Tree for a source node that is not in the graph
    pub fn empty(source: &str) -> Self {
        ShortestPathTree {
            source: source.to_string(),
            distances: BTreeMap::new(),
            predecessors: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance to `target`, [`UNREACHABLE`] for unreached or unknown nodes
    pub fn distance_to(&self, target: &str) -> f64 {
        self.distances.get(target).copied().unwrap_or(UNREACHABLE)
    }

    /// Walk predecessors back from `target` to the source.
    ///
    /// Returns an empty path when `target` was not reached.
    pub fn path_to(&self, target: &str) -> Vec<String> {
        if !self.distance_to(target).is_finite() {
            return Vec::new();
        }
        super::algos::shared::reconstruct_path(
            &self.source,
            target,
            self.distances.len(),
            |id| self.predecessors.get(id).map(String::as_str),
        )
    }
}

/// Bellman-Ford outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BellmanFordOutcome {
    /// A negative-weight cycle is reachable from the source
    NegativeCycle { source: String },
    /// Shortest distances are well defined
    Resolved(ShortestPathTree),
}

impl BellmanFordOutcome {
    pub fn has_negative_cycle(&self) -> bool {
        matches!(self, BellmanFordOutcome::NegativeCycle { .. })
    }

    pub fn tree(&self) -> Option<&ShortestPathTree> {
        match self {
            BellmanFordOutcome::Resolved(tree) => Some(tree),
            BellmanFordOutcome::NegativeCycle { .. } => None,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            BellmanFordOutcome::NegativeCycle { source } => source,
            BellmanFordOutcome::Resolved(tree) => &tree.source,
        }
    }
}

/// All-pairs distance matrix, rows and columns in ascending id order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    nodes: Vec<String>,
    distances: Vec<Vec<f64>>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl DistanceMatrix {
    /// Build a matrix from sorted node ids and a square distance table
    pub(crate) fn new(nodes: Vec<String>, distances: Vec<Vec<f64>>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        DistanceMatrix {
            nodes,
            distances,
            index,
        }
    }

    /// Node ids in row/column order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Distance from `from` to `to`, `None` if either id is unknown
    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        let i = *self.index.get(from)?;
        let j = *self.index.get(to)?;
        Some(self.distances[i][j])
    }

    /// All distances from `from`, in [`DistanceMatrix::nodes`] order
    pub fn row(&self, from: &str) -> Option<&[f64]> {
        self.index
            .get(from)
            .map(|&i| self.distances[i].as_slice())
    }

    /// Nested map of source id to destination id to distance
    pub fn to_map(&self) -> BTreeMap<String, BTreeMap<String, f64>> {
        self.nodes
            .iter()
            .zip(&self.distances)
            .map(|(from, row)| {
                let inner = self.nodes.iter().cloned().zip(row.iter().copied()).collect();
                (from.clone(), inner)
            })
            .collect()
    }
}

/// Minimum spanning tree (or forest component) result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinimumSpanningTree {
    /// Accepted edges in acceptance order
    pub edges: Vec<Edge>,
    pub total_weight: f64,
}

impl MinimumSpanningTree {
    pub fn empty() -> Self {
        MinimumSpanningTree {
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub(crate) fn accept(&mut self, edge: &Edge) {
        self.total_weight += edge.weight;
        self.edges.push(edge.clone());
    }
}
