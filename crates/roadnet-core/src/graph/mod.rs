//! Graph store and algorithms
//!
//! Provides the road network graph and the algorithms that run over it:
//! - BFS / DFS traversal with spanning tree extraction
//! - Dijkstra and Bellman-Ford single-source shortest paths
//! - Floyd-Warshall all-pairs distances
//! - Prim and Kruskal minimum spanning trees
//! - Graph provider trait for read-only access

pub mod algos;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{
    bellman_ford_shortest_paths, bfs_traverse, dfs_traverse, dijkstra_shortest_path,
    floyd_warshall_all_pairs, kruskal_minimum_spanning_tree, prim_minimum_spanning_tree,
    UnionFind,
};
pub use store::{Graph, Node};
pub use traversal::GraphProvider;
pub use types::{
    BellmanFordOutcome, DistanceMatrix, Edge, MinimumSpanningTree, PathResult, ShortestPathTree,
    TraversalResult, UNREACHABLE,
};
