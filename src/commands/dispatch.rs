//! Command dispatch logic for metrograph
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands;
use metrograph_core::config::Config;
use metrograph_core::db::Database;
use metrograph_core::error::Result;
use metrograph_core::graph::{build_from_repository, TransitGraph};

/// Resolved per-invocation context: database path and output settings.
pub struct Context {
    pub database: PathBuf,
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // Determine the root directory
    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let config = Config::load(&root)?;

    let database = cli
        .database
        .clone()
        .or_else(|| {
            config.database.as_ref().map(|path| {
                if path.is_absolute() {
                    path.clone()
                } else {
                    root.join(path)
                }
            })
        })
        .unwrap_or_else(|| root.join("metro.db"));

    let ctx = Context {
        database,
        format: cli.format.or(config.format).unwrap_or_default(),
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "resolve_config");
    }

    match &cli.command {
        Commands::Info => commands::info::execute(&ctx, start),

        Commands::Visit {
            start: stop,
            strategy,
        } => commands::visit::execute(&ctx, *stop, *strategy, start),

        Commands::Tree { start: stop } => commands::tree::execute(&ctx, *stop, start),

        Commands::Route { from, to } => commands::route::execute(&ctx, *from, *to, start),

        Commands::Import { file } => commands::import::execute(&ctx, file),
    }
}

/// Open the configured database and build the frozen graph from it.
pub fn load_graph(ctx: &Context, start: Instant) -> Result<TransitGraph> {
    let db = Database::open(&ctx.database)?;
    let graph = build_from_repository(&db)?;

    if ctx.verbose {
        tracing::debug!(
            elapsed = ?start.elapsed(),
            stops = graph.stop_count(),
            connections = graph.connection_count(),
            "load_graph"
        );
    }

    Ok(graph)
}
