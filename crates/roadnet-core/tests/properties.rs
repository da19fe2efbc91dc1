//! Cross-algorithm properties checked over a family of generated graphs

use roadnet_core::graph::{
    bellman_ford_shortest_paths, bfs_traverse, dfs_traverse, dijkstra_shortest_path,
    floyd_warshall_all_pairs, kruskal_minimum_spanning_tree, prim_minimum_spanning_tree, Graph,
    UnionFind,
};
use std::collections::HashSet;

/// Small linear congruential generator so the graphs are reproducible
struct Lcg(u64);

impl Lcg {
    fn below(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

fn node_name(i: usize) -> String {
    format!("n{i:02}")
}

/// Connected undirected graph: a random spanning chain plus extra roads
fn connected_graph(seed: u64, nodes: usize, extra_roads: usize) -> Graph {
    let mut rng = Lcg(seed);
    let mut graph = Graph::new();
    for i in 0..nodes {
        graph.add_node(node_name(i));
    }
    for i in 1..nodes {
        let parent = rng.below(i as u64) as usize;
        let weight = (rng.below(50) + 1) as f64;
        graph
            .add_road(&node_name(parent), &node_name(i), weight)
            .unwrap();
    }
    for _ in 0..extra_roads {
        let a = rng.below(nodes as u64) as usize;
        let b = rng.below(nodes as u64) as usize;
        let weight = (rng.below(50) + 1) as f64;
        graph.add_road(&node_name(a), &node_name(b), weight).unwrap();
    }
    graph
}

/// Directed graph with no guarantee of connectivity and no parallel edges
fn directed_graph(seed: u64, nodes: usize, edges: usize) -> Graph {
    let mut rng = Lcg(seed);
    let mut graph = Graph::new();
    for i in 0..nodes {
        graph.add_node(node_name(i));
    }
    let mut seen = HashSet::new();
    for _ in 0..edges {
        let a = rng.below(nodes as u64) as usize;
        let b = rng.below(nodes as u64) as usize;
        if !seen.insert((a, b)) {
            continue;
        }
        let weight = rng.below(20) as f64;
        graph.add_edge(&node_name(a), &node_name(b), weight);
    }
    graph
}

const SEEDS: [u64; 6] = [1, 7, 42, 1234, 98765, 31337];

#[test]
fn test_traversals_visit_each_reachable_node_once() {
    for seed in SEEDS {
        let graph = directed_graph(seed, 15, 30);
        for result in [bfs_traverse(&graph, "n00"), dfs_traverse(&graph, "n00")] {
            let unique: HashSet<&String> = result.visit_order.iter().collect();
            assert_eq!(unique.len(), result.visit_order.len(), "seed {seed}");
            assert_eq!(result.tree_edges.len(), result.visit_order.len() - 1);
            assert_eq!(result.visit_order[0], "n00");
        }

        let bfs = bfs_traverse(&graph, "n00");
        let dfs = dfs_traverse(&graph, "n00");
        let bfs_set: HashSet<&String> = bfs.visit_order.iter().collect();
        let dfs_set: HashSet<&String> = dfs.visit_order.iter().collect();
        assert_eq!(bfs_set, dfs_set, "seed {seed}");
    }
}

#[test]
fn test_dijkstra_agrees_with_bellman_ford() {
    for seed in SEEDS {
        let graph = directed_graph(seed, 12, 40);
        let outcome = bellman_ford_shortest_paths(&graph, "n00");
        let tree = outcome.tree().unwrap();

        for i in 0..12 {
            let target = node_name(i);
            let path = dijkstra_shortest_path(&graph, "n00", &target);
            assert_eq!(
                path.distance,
                tree.distance_to(&target),
                "seed {seed} target {target}"
            );
            assert_eq!(path.found(), tree.distance_to(&target).is_finite());
        }
    }
}

#[test]
fn test_floyd_warshall_matches_single_source_runs() {
    for seed in SEEDS {
        let graph = directed_graph(seed, 10, 25);
        let matrix = floyd_warshall_all_pairs(&graph);

        for i in 0..10 {
            let source = node_name(i);
            assert_eq!(matrix.get(&source, &source), Some(0.0));

            let outcome = bellman_ford_shortest_paths(&graph, &source);
            let tree = outcome.tree().unwrap();
            for j in 0..10 {
                let target = node_name(j);
                if i == j {
                    continue;
                }
                assert_eq!(
                    matrix.get(&source, &target),
                    Some(tree.distance_to(&target)),
                    "seed {seed} {source} -> {target}"
                );
            }
        }
    }
}

#[test]
fn test_prim_and_kruskal_agree_on_connected_graphs() {
    for seed in SEEDS {
        let graph = connected_graph(seed, 20, 25);
        let prim = prim_minimum_spanning_tree(&graph, "n00");
        let kruskal = kruskal_minimum_spanning_tree(&graph);

        assert_eq!(prim.edges.len(), 19, "seed {seed}");
        assert_eq!(kruskal.edges.len(), 19, "seed {seed}");
        assert_eq!(prim.total_weight, kruskal.total_weight, "seed {seed}");
    }
}

#[test]
fn test_kruskal_never_closes_a_cycle() {
    for seed in SEEDS {
        let graph = connected_graph(seed, 16, 30);
        let tree = kruskal_minimum_spanning_tree(&graph);

        let ids: Vec<String> = (0..16).map(node_name).collect();
        let mut sets = UnionFind::new(ids.iter().map(String::as_str));
        for edge in &tree.edges {
            assert!(
                sets.union(&edge.from, &edge.to),
                "seed {seed}: {edge} closes a cycle"
            );
        }
        assert_eq!(sets.set_count(), 1);
    }
}

#[test]
fn test_reachable_negative_cycle_is_reported() {
    let mut graph = connected_graph(5, 8, 4);
    graph.add_node("trap");
    graph.add_edge("n03", "trap", 1.0);
    graph.add_edge("trap", "n03", -100.0);

    assert!(bellman_ford_shortest_paths(&graph, "n00").has_negative_cycle());
}
