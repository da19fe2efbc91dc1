//! `roadnet cities` - list the network

use roadnet_core::graph::Graph;
use serde_json::json;

use super::format::{
    edge_record, json_envelope, node_record, output_by_format_result, print_json, print_lines,
    records_header,
};
use crate::cli::Cli;
use crate::error::Result;
use crate::network::Network;

/// Execute the cities command
pub fn execute(cli: &Cli, network: &Network) -> Result<()> {
    output_by_format_result!(cli.format,
        json => {
            let cities: Vec<_> = network
                .graph
                .nodes()
                .iter()
                .map(|node| json!({ "id": node.id(), "roads": node.edges() }))
                .collect();
            print_json(&json_envelope(network, "cities", &cities)?)
        },
        human => {
            print_lines(&human_lines(network, cli.quiet));
        },
        records => {
            print_lines(&record_lines(network));
        }
    )
}

fn summary(graph: &Graph) -> String {
    format!("{} cities, {} edges", graph.node_count(), graph.edge_count())
}

fn human_lines(network: &Network, quiet: bool) -> Vec<String> {
    let mut lines = vec![format!("{}: {}", network.name, summary(&network.graph))];
    if quiet {
        return lines;
    }

    for node in network.graph.nodes() {
        let roads: Vec<String> = node
            .edges()
            .iter()
            .map(|edge| format!("{} ({})", edge.to, edge.weight))
            .collect();
        if roads.is_empty() {
            lines.push(format!("  {}", node.id()));
        } else {
            lines.push(format!("  {} -> {}", node.id(), roads.join(", ")));
        }
    }
    lines
}

fn record_lines(network: &Network) -> Vec<String> {
    let graph = &network.graph;
    let mut lines = vec![records_header(
        network,
        "cities",
        &[
            ("cities", graph.node_count().to_string()),
            ("edges", graph.edge_count().to_string()),
        ],
    )];
    lines.extend(
        graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, node)| node_record(i, node.id())),
    );
    lines.extend(graph.all_edges().into_iter().map(edge_record));
    lines
}
