//! Built-in French road network
//!
//! Ten cities joined by twenty two-way roads, distances in kilometres.

use roadnet_core::graph::Graph;

use crate::error::Result;

pub const NAME: &str = "france";

const CITIES: [&str; 10] = [
    "Rennes", "Caen", "Lille", "Paris", "Nantes", "Bordeaux", "Dijon", "Nancy", "Lyon", "Grenoble",
];

const ROADS: [(&str, &str, f64); 20] = [
    ("Rennes", "Caen", 75.0),
    ("Rennes", "Paris", 110.0),
    ("Rennes", "Nantes", 45.0),
    ("Rennes", "Bordeaux", 130.0),
    ("Caen", "Paris", 50.0),
    ("Caen", "Lille", 65.0),
    ("Lille", "Paris", 70.0),
    ("Lille", "Nancy", 100.0),
    ("Lille", "Dijon", 120.0),
    ("Paris", "Nantes", 80.0),
    ("Paris", "Bordeaux", 150.0),
    ("Paris", "Dijon", 60.0),
    ("Nantes", "Bordeaux", 90.0),
    ("Bordeaux", "Lyon", 100.0),
    ("Dijon", "Nancy", 75.0),
    ("Dijon", "Lyon", 70.0),
    ("Dijon", "Grenoble", 75.0),
    ("Nancy", "Lyon", 90.0),
    ("Nancy", "Grenoble", 80.0),
    ("Lyon", "Grenoble", 40.0),
];

/// Build the built-in network. City insertion order fixes traversal order.
pub fn france() -> Result<Graph> {
    let mut graph = Graph::new();
    for city in CITIES {
        graph.add_node(city);
    }
    for (a, b, km) in ROADS {
        graph.add_road(a, b, km)?;
    }
    Ok(graph)
}
