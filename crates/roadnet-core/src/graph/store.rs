//! In-memory graph store
//!
//! Nodes are kept in insertion order, which fixes the order of
//! [`Graph::all_edges`] and therefore every algorithm that enumerates edges
//! globally.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Edge;

/// A graph node: a unique id plus its outgoing edges
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    edges: Vec<Edge>,
}

impl Node {
    fn new(id: String) -> Self {
        Node {
            id,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Outgoing edges in the order they were added
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Node/edge registry for a road network.
///
/// Built once, then only read. Edges can only connect nodes that are already
/// in the graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node if absent. Returns `true` when the node is new.
    pub fn add_node(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id.clone(), self.nodes.len());
        self.nodes.push(Node::new(id));
        true
    }

    /// Add a directed edge, rejecting unknown endpoints and non-finite weights
    pub fn try_add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        let source = self.checked_edge_source(from, to, weight)?;
        self.nodes[source].edges.push(Edge::new(from, to, weight));
        Ok(())
    }

    /// Add a directed edge.
    ///
    /// An unknown endpoint (or a NaN or infinite weight) makes this a no-op:
    /// nothing is added and no error is raised. Returns whether the edge was
    /// added. Use [`Graph::try_add_edge`] to get the reason instead.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> bool {
        match self.try_add_edge(from, to, weight) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(from, to, weight, reason = %e, "edge dropped");
                false
            }
        }
    }

    /// Add an undirected road as two edges of equal weight.
    ///
    /// Both directions are validated before either is inserted.
    pub fn add_road(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        let forward = self.checked_edge_source(a, b, weight)?;
        let backward = self.checked_edge_source(b, a, weight)?;
        self.nodes[forward].edges.push(Edge::new(a, b, weight));
        self.nodes[backward].edges.push(Edge::new(b, a, weight));
        Ok(())
    }

    fn checked_edge_source(&self, from: &str, to: &str, weight: f64) -> Result<usize> {
        let source = *self
            .index
            .get(from)
            .ok_or_else(|| GraphError::unknown_node(from))?;
        if !self.index.contains_key(to) {
            return Err(GraphError::unknown_node(to));
        }
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        Ok(source)
    }

    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every edge: per-node edge lists concatenated in node order
    pub fn all_edges(&self) -> Vec<&Edge> {
        self.nodes.iter().flat_map(|n| n.edges.iter()).collect()
    }
}

impl GraphProvider for Graph {
    fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(Node::id).collect()
    }

    fn contains_node(&self, id: &str) -> bool {
        Graph::contains_node(self, id)
    }

    fn outbound_edges(&self, id: &str) -> &[Edge] {
        self.get_node(id).map(Node::edges).unwrap_or(&[])
    }

    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn all_edges(&self) -> Vec<&Edge> {
        Graph::all_edges(self)
    }
}
