//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs` / `dfs`: traversal with spanning tree extraction
//! - `dijkstra`: single-target shortest path, non-negative weights
//! - `bellman_ford`: single-source shortest paths with negative cycle detection
//! - `floyd_warshall`: all-pairs distance matrix
//! - `prim` / `kruskal`: minimum spanning trees
//! - `union_find`: disjoint-set structure used by Kruskal
//! - `shared`: Common utilities used by multiple algorithms
//!
//! Every algorithm reads the graph through [`GraphProvider`](crate::graph::GraphProvider),
//! owns its working state for the duration of the call and returns a fresh
//! result. An unknown start node yields the algorithm's empty result.

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod prim;
pub mod shared;
pub mod union_find;

pub use bellman_ford::bellman_ford_shortest_paths;
pub use bfs::bfs_traverse;
pub use dfs::dfs_traverse;
pub use dijkstra::dijkstra_shortest_path;
pub use floyd_warshall::floyd_warshall_all_pairs;
pub use kruskal::kruskal_minimum_spanning_tree;
pub use prim::prim_minimum_spanning_tree;
pub use union_find::UnionFind;
