//! Road networks the commands run against

mod builtin;
mod file;

use file::NetworkFile;

use std::path::Path;

use roadnet_core::graph::Graph;

use crate::error::{Result, RoadnetError};

/// A named, fully built road network
#[derive(Debug, Clone)]
pub struct Network {
    pub name: String,
    pub graph: Graph,
}

impl Network {
    /// The built-in French network
    pub fn builtin() -> Result<Self> {
        Ok(Network {
            name: builtin::NAME.to_string(),
            graph: builtin::france()?,
        })
    }

    /// Load a network from `path`, or the built-in one when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Self::builtin();
        };

        let file = NetworkFile::load(path)?;
        let graph = file.build(path)?;
        Ok(Network {
            name: file.display_name(path),
            graph,
        })
    }

    /// Fail with a data error unless `id` is a city of this network
    pub fn require_city(&self, id: &str) -> Result<()> {
        if self.graph.contains_node(id) {
            Ok(())
        } else {
            Err(RoadnetError::unknown_city(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_defaults_to_builtin() {
        let network = Network::load(None).unwrap();
        assert_eq!(network.name, "france");
        assert_eq!(network.graph.node_count(), 10);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pair.toml");
        fs::write(
            &path,
            "name = \"Pair\"\ncities = [\"A\", \"B\"]\n\n[[roads]]\nfrom = \"A\"\nto = \"B\"\nweight = 3.0\n",
        )
        .unwrap();

        let network = Network::load(Some(&path)).unwrap();
        assert_eq!(network.name, "Pair");
        assert_eq!(network.graph.edge_count(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Network::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, RoadnetError::Io(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "cities = \"not a list\"\n").unwrap();

        let err = Network::load(Some(&path)).unwrap_err();
        assert!(matches!(err, RoadnetError::Toml(_)));
    }

    #[test]
    fn test_require_city() {
        let network = Network::builtin().unwrap();
        assert!(network.require_city("Lyon").is_ok());
        assert!(matches!(
            network.require_city("Brest"),
            Err(RoadnetError::UnknownCity { id }) if id == "Brest"
        ));
    }
}
