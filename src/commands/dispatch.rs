//! Command dispatch logic for roadnet
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{cities, matrix, paths, spanning, traverse};
use crate::error::{Result, RoadnetError};
use crate::network::Network;
use crate::trace_time;

pub fn run(cli: &Cli, started: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        return Err(RoadnetError::UsageError(
            "no command given (try `roadnet --help`)".to_string(),
        ));
    };

    let network = Network::load(cli.network.as_deref())?;
    trace_time!(
        started,
        "load_network",
        cities = network.graph.node_count(),
        edges = network.graph.edge_count()
    );

    let algo_start = Instant::now();
    let result = match command {
        Commands::Cities => cities::execute(cli, &network),

        Commands::Bfs { start } => traverse::execute(cli, &network, traverse::Order::Breadth, start),

        Commands::Dfs { start } => traverse::execute(cli, &network, traverse::Order::Depth, start),

        Commands::Dijkstra { from, to } => paths::execute_dijkstra(cli, &network, from, to),

        Commands::BellmanFord { source, to } => {
            paths::execute_bellman_ford(cli, &network, source, to.as_deref())
        }

        Commands::FloydWarshall { from } => matrix::execute(cli, &network, from.as_deref()),

        Commands::Prim { start } => {
            spanning::execute(cli, &network, spanning::Method::Prim { start: start.as_str() })
        }

        Commands::Kruskal => spanning::execute(cli, &network, spanning::Method::Kruskal),
    };

    trace_time!(
        algo_start,
        "run_command",
        command = command.name(),
        format = tracing::field::display(cli.format)
    );
    tracing::debug!(elapsed = ?started.elapsed(), network = %network.name, "total");
    result
}
