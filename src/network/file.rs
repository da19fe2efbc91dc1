//! TOML network files
//!
//! ```toml
//! name = "Brittany"
//! cities = ["Rennes", "Brest", "Quimper"]
//! strict = true
//!
//! [[roads]]
//! from = "Rennes"
//! to = "Brest"
//! weight = 240.0
//! one_way = false
//! ```

use std::fs;
use std::path::Path;

use roadnet_core::graph::Graph;
use serde::Deserialize;

use crate::error::{Result, RoadnetError};

/// A road network as written on disk
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkFile {
    /// Display name (defaults to the file stem)
    #[serde(default)]
    pub name: Option<String>,

    /// City ids in insertion order
    pub cities: Vec<String>,

    /// Reject roads that name unknown cities instead of dropping them
    #[serde(default = "default_strict")]
    pub strict: bool,

    #[serde(default)]
    pub roads: Vec<RoadSpec>,
}

/// One road between two cities
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoadSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,

    /// Add only the `from -> to` direction
    #[serde(default)]
    pub one_way: bool,
}

fn default_strict() -> bool {
    true
}

impl NetworkFile {
    /// Load a network description from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: NetworkFile = toml::from_str(&content)?;
        Ok(file)
    }

    /// Build the graph described by this file.
    ///
    /// In strict mode any road naming an unknown city (or with a non-finite weight)
    /// fails the whole build. Otherwise such roads are skipped with a warning.
    pub fn build(&self, path: &Path) -> Result<Graph> {
        let mut graph = Graph::new();
        for city in &self.cities {
            if !graph.add_node(city.as_str()) {
                tracing::warn!(city = %city, "duplicate city ignored");
            }
        }

        for road in &self.roads {
            if self.strict {
                let added = if road.one_way {
                    graph.try_add_edge(&road.from, &road.to, road.weight)
                } else {
                    graph.add_road(&road.from, &road.to, road.weight)
                };
                added.map_err(|e| RoadnetError::invalid_network(path, e))?;
            } else if road.one_way {
                graph.add_edge(&road.from, &road.to, road.weight);
            } else {
                // Directions are added independently, so one can survive alone
                graph.add_edge(&road.from, &road.to, road.weight);
                graph.add_edge(&road.to, &road.from, road.weight);
            }
        }

        tracing::debug!(
            cities = graph.node_count(),
            edges = graph.edge_count(),
            strict = self.strict,
            "network_built"
        );
        Ok(graph)
    }

    /// Name from the file, else the file stem
    pub fn display_name(&self, path: &Path) -> String {
        self.name.clone().unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "network".to_string())
        })
    }
}
