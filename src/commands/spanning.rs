//! `roadnet prim` / `roadnet kruskal` - minimum spanning trees

use roadnet_core::graph::{
    kruskal_minimum_spanning_tree, prim_minimum_spanning_tree, MinimumSpanningTree,
};

use super::format::{
    edge_record, json_envelope, output_by_format_result, print_json, print_lines, records_header,
};
use crate::cli::Cli;
use crate::error::Result;
use crate::format::quote_id;
use crate::network::Network;

/// Spanning tree algorithm, Prim carrying its start city
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method<'a> {
    Prim { start: &'a str },
    Kruskal,
}

impl Method<'_> {
    fn name(&self) -> &'static str {
        match self {
            Method::Prim { .. } => "prim",
            Method::Kruskal => "kruskal",
        }
    }
}

/// Execute a spanning tree command
pub fn execute(cli: &Cli, network: &Network, method: Method<'_>) -> Result<()> {
    let tree = match method {
        Method::Prim { start } => {
            network.require_city(start)?;
            prim_minimum_spanning_tree(&network.graph, start)
        }
        Method::Kruskal => kruskal_minimum_spanning_tree(&network.graph),
    };

    output_by_format_result!(cli.format,
        json => print_json(&json_envelope(network, method.name(), &tree)?),
        human => {
            print_lines(&human_lines(network, method, &tree, cli.quiet));
        },
        records => {
            print_lines(&record_lines(network, method, &tree));
        }
    )
}

fn human_lines(
    network: &Network,
    method: Method<'_>,
    tree: &MinimumSpanningTree,
    quiet: bool,
) -> Vec<String> {
    let title = match method {
        Method::Prim { start } => format!("Minimum spanning tree from {}", start),
        Method::Kruskal => "Minimum spanning forest".to_string(),
    };
    let mut lines = vec![format!(
        "{}: {} edges, total weight {}",
        title,
        tree.edges.len(),
        tree.total_weight
    )];

    // Fewer than |V| - 1 edges means some cities were left out
    let cities = network.graph.node_count();
    if !quiet && tree.edges.len() + 1 < cities {
        lines.push(match method {
            Method::Prim { .. } => format!(
                "Network is disconnected: {} of {} cities spanned",
                tree.edges.len() + 1,
                cities
            ),
            Method::Kruskal => format!(
                "Network is disconnected: {} components",
                cities - tree.edges.len()
            ),
        });
    }

    if !quiet {
        lines.extend(tree.edges.iter().map(|edge| format!("  {}", edge)));
    }
    lines
}

fn record_lines(network: &Network, method: Method<'_>, tree: &MinimumSpanningTree) -> Vec<String> {
    let mut fields = Vec::new();
    if let Method::Prim { start } = method {
        fields.push(("start", quote_id(start)));
    }
    fields.push(("edges", tree.edges.len().to_string()));
    fields.push(("total", tree.total_weight.to_string()));

    let mut lines = vec![records_header(network, method.name(), &fields)];
    lines.extend(tree.edges.iter().map(edge_record));
    lines
}
