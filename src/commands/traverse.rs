//! `roadnet bfs` / `roadnet dfs` - graph traversal from a city

use roadnet_core::graph::{bfs_traverse, dfs_traverse, TraversalResult};

use super::format::{
    edge_record, json_envelope, node_record, output_by_format_result, print_json, print_lines,
    records_header,
};
use crate::cli::Cli;
use crate::error::Result;
use crate::format::quote_id;
use crate::network::Network;

/// Traversal strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Breadth,
    Depth,
}

impl Order {
    pub fn name(self) -> &'static str {
        match self {
            Order::Breadth => "bfs",
            Order::Depth => "dfs",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Order::Breadth => "Breadth-first",
            Order::Depth => "Depth-first",
        }
    }
}

/// Execute a traversal command
pub fn execute(cli: &Cli, network: &Network, order: Order, start: &str) -> Result<()> {
    network.require_city(start)?;

    let result = match order {
        Order::Breadth => bfs_traverse(&network.graph, start),
        Order::Depth => dfs_traverse(&network.graph, start),
    };

    output_by_format_result!(cli.format,
        json => print_json(&json_envelope(network, order.name(), &result)?),
        human => {
            print_lines(&human_lines(order, &result, cli.quiet));
        },
        records => {
            print_lines(&record_lines(network, order, &result));
        }
    )
}

fn human_lines(order: Order, result: &TraversalResult, quiet: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "{} traversal from {}: {}",
        order.label(),
        result.start,
        result.visit_order.join(", ")
    )];

    if !quiet {
        lines.push(format!("Tree edges ({}):", result.tree_edges.len()));
        lines.extend(result.tree_edges.iter().map(|edge| format!("  {}", edge)));
    }
    lines
}

fn record_lines(network: &Network, order: Order, result: &TraversalResult) -> Vec<String> {
    let mut lines = vec![records_header(
        network,
        order.name(),
        &[
            ("start", quote_id(&result.start)),
            ("visited", result.visit_order.len().to_string()),
        ],
    )];
    lines.extend(
        result
            .visit_order
            .iter()
            .enumerate()
            .map(|(i, id)| node_record(i, id)),
    );
    lines.extend(result.tree_edges.iter().map(edge_record));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bfs_from_rennes() -> (Network, TraversalResult) {
        let network = Network::builtin().unwrap();
        let result = bfs_traverse(&network.graph, "Rennes");
        (network, result)
    }

    #[test]
    fn test_human_lines() {
        let (_, result) = bfs_from_rennes();
        let lines = human_lines(Order::Breadth, &result, false);
        assert_eq!(
            lines[0],
            "Breadth-first traversal from Rennes: Rennes, Caen, Paris, Nantes, Bordeaux, Lille, Dijon, Lyon, Nancy, Grenoble"
        );
        assert_eq!(lines[1], "Tree edges (9):");
        assert_eq!(lines[2], "  Rennes -> Caen (75)");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_human_lines_quiet() {
        let (_, result) = bfs_from_rennes();
        assert_eq!(human_lines(Order::Breadth, &result, true).len(), 1);
    }

    #[test]
    fn test_record_lines() {
        let (network, result) = bfs_from_rennes();
        let lines = record_lines(&network, Order::Breadth, &result);
        assert_eq!(
            lines[0],
            "H roadnet=1 records=1 network=\"france\" mode=bfs start=\"Rennes\" visited=10"
        );
        assert_eq!(lines[1], "N 0 \"Rennes\"");
        assert_eq!(lines[11], "E \"Rennes\" \"Caen\" 75");
        assert_eq!(lines.len(), 1 + 10 + 9);
    }
}
