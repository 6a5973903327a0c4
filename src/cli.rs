//! CLI argument parsing for metrograph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --root, --database, --format, --quiet, --verbose

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use metrograph_core::format::OutputFormat;

/// Metrograph - transit network graph queries
#[derive(Parser, Debug)]
#[command(name = "metrograph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the config file
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit database path (overrides the config file)
    #[arg(long, global = true, env = "METROGRAPH_DB")]
    pub database: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report stop and connection counts for the loaded network
    Info,

    /// Visit every stop reachable from a start stop
    Visit {
        /// Start stop id
        start: i64,

        /// Traversal strategy
        #[arg(long, short, value_enum, default_value_t = Strategy::Bfs)]
        strategy: Strategy,
    },

    /// Reconstruct the breadth-first spanning tree from a root stop
    Tree {
        /// Root stop id
        start: i64,
    },

    /// Find the minimum-hop route between two stops
    Route {
        /// Source stop id
        from: i64,

        /// Destination stop id
        to: i64,
    },

    /// Load stops and connections from a JSON document into a new database
    Import {
        /// Path to the JSON document
        file: PathBuf,
    },
}

/// Traversal strategy for the visit command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Breadth-first: nearest stops first
    Bfs,
    /// Depth-first: follow one line to its end before backtracking
    Dfs,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: metrograph_core::error::MetroError| e.to_string())
}
