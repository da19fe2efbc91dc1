//! Shared output formatting helpers for commands
//!
//! Records lines: `H` header, `N` node, `E` edge, `V` distance value.

use roadnet_core::graph::Edge;
use serde::Serialize;
use serde_json::{json, Value};

pub use crate::output_by_format_result;

use crate::error::Result;
use crate::format::{format_distance, quote_id};
use crate::network::Network;

/// Records header line with the network and mode, then `key=value` fields
pub fn records_header(network: &Network, mode: &str, extra_fields: &[(&str, String)]) -> String {
    let mut parts = vec![
        "H roadnet=1 records=1".to_string(),
        format!("network={}", quote_id(&network.name)),
        format!("mode={}", mode),
    ];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }

    parts.join(" ")
}

pub fn node_record(position: usize, id: &str) -> String {
    format!("N {} {}", position, quote_id(id))
}

pub fn edge_record(edge: &Edge) -> String {
    format!(
        "E {} {} {}",
        quote_id(&edge.from),
        quote_id(&edge.to),
        edge.weight
    )
}

pub fn distance_record(from: &str, to: &str, distance: f64) -> String {
    format!(
        "V {} {} {}",
        quote_id(from),
        quote_id(to),
        format_distance(distance)
    )
}

/// `A -> B -> C (distance)`, or a no-path message
pub fn path_line(from: &str, to: &str, path: &[String], distance: f64) -> String {
    if path.is_empty() {
        format!("No path from {} to {}", from, to)
    } else {
        format!("{} ({})", path.join(" -> "), format_distance(distance))
    }
}

/// Wrap an algorithm result with the network and algorithm names
pub fn json_envelope<T: Serialize>(network: &Network, algorithm: &str, result: &T) -> Result<Value> {
    Ok(json!({
        "network": network.name,
        "algorithm": algorithm,
        "result": serde_json::to_value(result)?,
    }))
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadnet_core::graph::PathResult;

    #[test]
    fn test_records_header() {
        let network = Network::builtin().unwrap();
        let header = records_header(&network, "bfs", &[("start", quote_id("Rennes"))]);
        assert_eq!(
            header,
            "H roadnet=1 records=1 network=\"france\" mode=bfs start=\"Rennes\""
        );
    }

    #[test]
    fn test_records_lines() {
        assert_eq!(node_record(2, "Paris"), "N 2 \"Paris\"");
        assert_eq!(
            edge_record(&Edge::new("Caen", "Paris", 50.0)),
            "E \"Caen\" \"Paris\" 50"
        );
        assert_eq!(
            distance_record("Rennes", "Atlantis", f64::INFINITY),
            "V \"Rennes\" \"Atlantis\" inf"
        );
    }

    #[test]
    fn test_path_line() {
        let path = vec!["Bordeaux".to_string(), "Paris".to_string(), "Lille".to_string()];
        assert_eq!(
            path_line("Bordeaux", "Lille", &path, 220.0),
            "Bordeaux -> Paris -> Lille (220)"
        );
        assert_eq!(
            path_line("A", "B", &[], f64::INFINITY),
            "No path from A to B"
        );
    }

    #[test]
    fn test_json_envelope_maps_unreachable_to_null() {
        let network = Network::builtin().unwrap();
        let value = json_envelope(&network, "dijkstra", &PathResult::not_found("A", "B")).unwrap();
        assert_eq!(value["network"], "france");
        assert_eq!(value["algorithm"], "dijkstra");
        assert!(value["result"]["distance"].is_null());
    }
}
