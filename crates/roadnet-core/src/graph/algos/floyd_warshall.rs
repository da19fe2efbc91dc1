//! Floyd-Warshall all-pairs shortest distances

use crate::graph::types::{DistanceMatrix, UNREACHABLE};
use crate::graph::GraphProvider;
use std::collections::HashMap;

/// Shortest distance between every ordered pair of nodes.
///
/// Rows and columns follow ascending id order. The diagonal starts at zero and
/// self-loop edges are ignored. When several edges join the same ordered
/// pair, the last one seeds the table (later edges overwrite earlier ones),
/// so parallel edges are not reduced to their minimum. Negative cycles are not
/// detected: distances on such a cycle are whatever the relaxation produces.
#[tracing::instrument(skip_all)]
pub fn floyd_warshall_all_pairs(provider: &dyn GraphProvider) -> DistanceMatrix {
    let mut ids = provider.node_ids();
    ids.sort_unstable();
    let n = ids.len();

    let position: HashMap<&str, usize> = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

    let mut dist = vec![vec![UNREACHABLE; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }

    for edge in provider.all_edges() {
        if edge.is_self_loop() {
            continue;
        }
        let (Some(&i), Some(&j)) = (
            position.get(edge.from.as_str()),
            position.get(edge.to.as_str()),
        ) else {
            continue;
        };
        dist[i][j] = edge.weight;
    }

    for k in 0..n {
        for i in 0..n {
            let through_k = dist[i][k];
            if !through_k.is_finite() {
                continue;
            }
            for j in 0..n {
                let candidate = through_k + dist[k][j];
                if candidate < dist[i][j] {
                    dist[i][j] = candidate;
                }
            }
        }
    }

    tracing::debug!(nodes = n, "floyd_warshall_complete");

    DistanceMatrix::new(ids.into_iter().map(str::to_string).collect(), dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn graph_with(nodes: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
        let mut graph = Graph::new();
        for id in nodes {
            graph.add_node(*id);
        }
        for (from, to, weight) in edges {
            graph.try_add_edge(from, to, *weight).unwrap();
        }
        graph
    }

    #[test]
    fn test_floyd_warshall_relaxes_through_intermediate() {
        let graph = graph_with(
            &["C", "B", "A"],
            &[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 10.0)],
        );

        let matrix = floyd_warshall_all_pairs(&graph);
        assert_eq!(matrix.nodes(), &["A", "B", "C"]);
        assert_eq!(matrix.get("A", "C"), Some(3.0));
        assert_eq!(matrix.get("C", "A"), Some(UNREACHABLE));
        assert_eq!(matrix.get("B", "B"), Some(0.0));
    }

    #[test]
    fn test_floyd_warshall_last_parallel_edge_wins() {
        let graph = graph_with(&["A", "B"], &[("A", "B", 1.0), ("A", "B", 7.0)]);

        let matrix = floyd_warshall_all_pairs(&graph);
        assert_eq!(matrix.get("A", "B"), Some(7.0));
    }

    #[test]
    fn test_floyd_warshall_ignores_self_loops() {
        let graph = graph_with(&["A", "B"], &[("A", "A", -4.0), ("A", "B", 2.0)]);

        let matrix = floyd_warshall_all_pairs(&graph);
        assert_eq!(matrix.get("A", "A"), Some(0.0));
        assert_eq!(matrix.get("A", "B"), Some(2.0));
    }

    #[test]
    fn test_floyd_warshall_negative_edge() {
        let graph = graph_with(
            &["A", "B", "C"],
            &[("A", "B", 4.0), ("A", "C", 1.0), ("C", "B", -2.0)],
        );

        let matrix = floyd_warshall_all_pairs(&graph);
        assert_eq!(matrix.get("A", "B"), Some(-1.0));
    }

    #[test]
    fn test_floyd_warshall_empty_graph() {
        let matrix = floyd_warshall_all_pairs(&Graph::new());
        assert!(matrix.is_empty());
        assert!(matrix.to_map().is_empty());
    }

    #[test]
    fn test_floyd_warshall_disconnected_pairs_stay_unreachable() {
        let graph = graph_with(&["A", "B", "C"], &[("A", "B", 1.0)]);

        let matrix = floyd_warshall_all_pairs(&graph);
        assert_eq!(matrix.row("C"), Some(&[UNREACHABLE, UNREACHABLE, 0.0][..]));
    }
}
