//! `roadnet floyd-warshall` - all-pairs distances

use std::collections::BTreeMap;

use roadnet_core::graph::{floyd_warshall_all_pairs, DistanceMatrix};
use serde_json::json;

use super::format::{
    distance_record, json_envelope, output_by_format_result, print_json, print_lines,
    records_header,
};
use crate::cli::Cli;
use crate::error::Result;
use crate::format::format_distance;
use crate::network::Network;

/// Execute the floyd-warshall command, optionally for a single row
pub fn execute(cli: &Cli, network: &Network, from: Option<&str>) -> Result<()> {
    if let Some(from) = from {
        network.require_city(from)?;
    }

    let matrix = floyd_warshall_all_pairs(&network.graph);

    match from {
        Some(from) => output_by_format_result!(cli.format,
            json => {
                let row: BTreeMap<&str, f64> = row_pairs(&matrix, from).into_iter().collect();
                print_json(&json_envelope(network, "floyd-warshall", &json!({
                    "from": from,
                    "distances": row,
                }))?)
            },
            human => {
                print_lines(&row_human_lines(&matrix, from));
            },
            records => {
                print_lines(&record_lines(network, &matrix, &[from]));
            }
        ),
        None => output_by_format_result!(cli.format,
            json => print_json(&json_envelope(network, "floyd-warshall", &matrix)?),
            human => {
                print_lines(&table_lines(&matrix));
            },
            records => {
                let sources: Vec<&str> = matrix.nodes().iter().map(String::as_str).collect();
                print_lines(&record_lines(network, &matrix, &sources));
            }
        ),
    }
}

fn row_pairs<'a>(matrix: &'a DistanceMatrix, from: &str) -> Vec<(&'a str, f64)> {
    let Some(row) = matrix.row(from) else {
        return Vec::new();
    };
    matrix
        .nodes()
        .iter()
        .map(String::as_str)
        .zip(row.iter().copied())
        .collect()
}

fn row_human_lines(matrix: &DistanceMatrix, from: &str) -> Vec<String> {
    let mut lines = vec![format!("Distances from {}:", from)];
    let width = matrix.nodes().iter().map(String::len).max().unwrap_or(0);
    lines.extend(row_pairs(matrix, from).into_iter().map(|(to, distance)| {
        format!("  {:<width$}  {:>6}", to, format_distance(distance), width = width)
    }));
    lines
}

/// Square table, one row per source city
fn table_lines(matrix: &DistanceMatrix) -> Vec<String> {
    let width = matrix
        .nodes()
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max(6);

    let mut header = format!("{:<width$}", "", width = width);
    for id in matrix.nodes() {
        header.push_str(&format!(" {:>width$}", id, width = width));
    }

    let mut lines = vec![header.trim_end().to_string()];
    for from in matrix.nodes() {
        let mut line = format!("{:<width$}", from, width = width);
        for (_, distance) in row_pairs(matrix, from) {
            line.push_str(&format!(" {:>width$}", format_distance(distance), width = width));
        }
        lines.push(line);
    }
    lines
}

fn record_lines(network: &Network, matrix: &DistanceMatrix, sources: &[&str]) -> Vec<String> {
    let mut lines = vec![records_header(
        network,
        "floyd-warshall",
        &[
            ("cities", matrix.len().to_string()),
            ("rows", sources.len().to_string()),
        ],
    )];
    for from in sources {
        lines.extend(
            row_pairs(matrix, from)
                .into_iter()
                .map(|(to, distance)| distance_record(from, to, distance)),
        );
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadnet_core::graph::Graph;

    fn one_way_pair() -> Network {
        let mut graph = Graph::new();
        graph.add_node("A");
        graph.add_node("B");
        graph.add_edge("A", "B", 4.0);
        Network {
            name: "pair".to_string(),
            graph,
        }
    }

    #[test]
    fn test_table_lines() {
        let network = one_way_pair();
        let matrix = floyd_warshall_all_pairs(&network.graph);
        assert_eq!(
            table_lines(&matrix),
            vec![
                "            A      B",
                "A           0      4",
                "B         inf      0",
            ]
        );
    }

    #[test]
    fn test_row_human_lines() {
        let network = Network::builtin().unwrap();
        let matrix = floyd_warshall_all_pairs(&network.graph);
        let lines = row_human_lines(&matrix, "Bordeaux");
        assert_eq!(lines[0], "Distances from Bordeaux:");
        assert_eq!(lines.len(), 11);
        assert!(lines.iter().any(|l| l.trim_start().starts_with("Lille") && l.ends_with("220")));
    }

    #[test]
    fn test_record_lines_single_row() {
        let network = one_way_pair();
        let matrix = floyd_warshall_all_pairs(&network.graph);
        assert_eq!(
            record_lines(&network, &matrix, &["B"]),
            vec![
                "H roadnet=1 records=1 network=\"pair\" mode=floyd-warshall cities=2 rows=1",
                "V \"B\" \"A\" inf",
                "V \"B\" \"B\" 0",
            ]
        );
    }
}
