//! Roadnet Core Library
//!
//! Graph algorithms engine for the roadnet tool: a small weighted graph store
//! plus traversal, shortest-path and minimum spanning tree algorithms.
//!
//! The core performs no I/O. Callers build a [`graph::Graph`], then run one of
//! the algorithms in [`graph::algos`] against it and receive a plain result
//! record.

pub mod error;
pub mod graph;
