//! CLI argument parsing for roadnet
//!
//! Uses clap derive. Global flags: --network, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod format;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Roadnet - graph algorithms over a road network
#[derive(Parser, Debug)]
#[command(name = "roadnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Road network file (TOML). Uses the built-in French network when omitted
    #[arg(long, global = true, env = "ROADNET_NETWORK")]
    pub network: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events from the algorithms
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the cities and roads of the network
    Cities,

    /// Breadth-first traversal from a city
    Bfs {
        /// City to start from
        start: String,
    },

    /// Depth-first traversal from a city
    Dfs {
        /// City to start from
        start: String,
    },

    /// Shortest path between two cities (non-negative weights)
    Dijkstra {
        /// Departure city
        from: String,

        /// Destination city
        to: String,
    },

    /// Shortest distances from a city, tolerating negative weights
    BellmanFord {
        /// Source city
        source: String,

        /// Only report the path to this city
        #[arg(long)]
        to: Option<String>,
    },

    /// Distances between every pair of cities
    FloydWarshall {
        /// Only report distances from this city
        #[arg(long)]
        from: Option<String>,
    },

    /// Minimum spanning tree grown from a city
    Prim {
        /// City to grow the tree from
        start: String,
    },

    /// Minimum spanning forest over the whole network
    Kruskal,
}

impl Commands {
    /// Short command name used in logs and records headers
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Cities => "cities",
            Commands::Bfs { .. } => "bfs",
            Commands::Dfs { .. } => "dfs",
            Commands::Dijkstra { .. } => "dijkstra",
            Commands::BellmanFord { .. } => "bellman-ford",
            Commands::FloydWarshall { .. } => "floyd-warshall",
            Commands::Prim { .. } => "prim",
            Commands::Kruskal => "kruskal",
        }
    }
}
