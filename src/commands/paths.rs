//! `roadnet dijkstra` / `roadnet bellman-ford` - shortest paths

use roadnet_core::graph::{
    bellman_ford_shortest_paths, dijkstra_shortest_path, BellmanFordOutcome, PathResult,
    ShortestPathTree,
};

use super::format::{
    distance_record, json_envelope, node_record, output_by_format_result, path_line, print_json,
    print_lines, records_header,
};
use crate::cli::Cli;
use crate::error::Result;
use crate::format::{format_distance, quote_id};
use crate::network::Network;

/// Execute the dijkstra command
pub fn execute_dijkstra(cli: &Cli, network: &Network, from: &str, to: &str) -> Result<()> {
    network.require_city(from)?;
    network.require_city(to)?;

    let result = dijkstra_shortest_path(&network.graph, from, to);

    output_by_format_result!(cli.format,
        json => print_json(&json_envelope(network, "dijkstra", &result)?),
        human => {
            print_lines(&path_human_lines(&result, cli.quiet));
        },
        records => {
            print_lines(&path_record_lines(network, "dijkstra", &result));
        }
    )
}

/// Execute the bellman-ford command
pub fn execute_bellman_ford(
    cli: &Cli,
    network: &Network,
    source: &str,
    to: Option<&str>,
) -> Result<()> {
    network.require_city(source)?;
    if let Some(to) = to {
        network.require_city(to)?;
    }

    let outcome = bellman_ford_shortest_paths(&network.graph, source);

    // A single target narrows a resolved tree down to one path
    if let (Some(to), BellmanFordOutcome::Resolved(tree)) = (to, &outcome) {
        let result = path_from_tree(tree, to);
        return output_by_format_result!(cli.format,
            json => print_json(&json_envelope(network, "bellman-ford", &result)?),
            human => {
                print_lines(&path_human_lines(&result, cli.quiet));
            },
            records => {
                print_lines(&path_record_lines(network, "bellman-ford", &result));
            }
        );
    }

    output_by_format_result!(cli.format,
        json => print_json(&json_envelope(network, "bellman-ford", &outcome)?),
        human => {
            print_lines(&outcome_human_lines(&outcome));
        },
        records => {
            print_lines(&outcome_record_lines(network, &outcome));
        }
    )
}

fn path_from_tree(tree: &ShortestPathTree, to: &str) -> PathResult {
    let path = tree.path_to(to);
    if path.is_empty() {
        return PathResult::not_found(&tree.source, to);
    }
    PathResult {
        from: tree.source.clone(),
        to: to.to_string(),
        path,
        distance: tree.distance_to(to),
    }
}

fn path_human_lines(result: &PathResult, quiet: bool) -> Vec<String> {
    let mut lines = vec![path_line(
        &result.from,
        &result.to,
        &result.path,
        result.distance,
    )];
    if result.found() && !quiet {
        lines.push(format!("{} hops", result.hops()));
    }
    lines
}

fn path_record_lines(network: &Network, mode: &str, result: &PathResult) -> Vec<String> {
    let mut lines = vec![records_header(
        network,
        mode,
        &[
            ("from", quote_id(&result.from)),
            ("to", quote_id(&result.to)),
            ("found", result.found().to_string()),
            ("distance", format_distance(result.distance)),
            ("hops", result.hops().to_string()),
        ],
    )];
    lines.extend(
        result
            .path
            .iter()
            .enumerate()
            .map(|(i, id)| node_record(i, id)),
    );
    lines
}

/// Reached cities, nearest first, then unreachable ones by name
fn ranked_distances(tree: &ShortestPathTree) -> Vec<(&str, f64)> {
    let mut ranked: Vec<(&str, f64)> = tree
        .distances
        .iter()
        .map(|(id, &distance)| (id.as_str(), distance))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    ranked
}

fn outcome_human_lines(outcome: &BellmanFordOutcome) -> Vec<String> {
    let tree = match outcome {
        BellmanFordOutcome::NegativeCycle { source } => {
            return vec![format!("Negative cycle reachable from {}", source)];
        }
        BellmanFordOutcome::Resolved(tree) => tree,
    };

    let mut lines = vec![format!("Shortest distances from {}:", tree.source)];
    let width = tree.distances.keys().map(String::len).max().unwrap_or(0);
    for (id, distance) in ranked_distances(tree) {
        let path = tree.path_to(id);
        let route = if path.is_empty() {
            "unreachable".to_string()
        } else {
            path.join(" -> ")
        };
        lines.push(format!(
            "  {:<width$}  {:>6}  {}",
            id,
            format_distance(distance),
            route,
            width = width
        ));
    }
    lines
}

fn outcome_record_lines(network: &Network, outcome: &BellmanFordOutcome) -> Vec<String> {
    let status = if outcome.has_negative_cycle() {
        "negative_cycle"
    } else {
        "resolved"
    };
    let mut lines = vec![records_header(
        network,
        "bellman-ford",
        &[
            ("source", quote_id(outcome.source())),
            ("status", status.to_string()),
        ],
    )];
    if let Some(tree) = outcome.tree() {
        lines.extend(
            ranked_distances(tree)
                .into_iter()
                .map(|(id, distance)| distance_record(&tree.source, id, distance)),
        );
    }
    lines
}
