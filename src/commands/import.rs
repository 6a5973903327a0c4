//! Import command: load a JSON network document into a new database
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::dispatch::Context;
use crate::cli::OutputFormat;
use metrograph_core::db::Database;
use metrograph_core::error::{MetroError, Result};
use metrograph_core::graph::build_graph;
use metrograph_core::stop::Stop;

/// On-disk import document: the full stop and connection listing.
#[derive(Debug, Deserialize)]
struct NetworkDocument {
    stops: Vec<Stop>,
    connections: Vec<Connection>,
}

#[derive(Debug, Deserialize)]
struct Connection {
    from: i64,
    to: i64,
}

/// Execute the import command
pub fn execute(ctx: &Context, file: &Path) -> Result<()> {
    if ctx.database.exists() {
        return Err(MetroError::DatabaseExists {
            path: ctx.database.clone(),
        });
    }

    let raw = fs::read_to_string(file)?;
    let document: NetworkDocument = serde_json::from_str(&raw)?;

    let pairs: Vec<(i64, i64)> = document.connections.iter().map(|c| (c.from, c.to)).collect();

    // Validate before writing: a malformed document must not leave a
    // half-written database behind.
    let graph = build_graph(document.stops.clone(), &pairs)?;

    let db = Database::create(&ctx.database)?;
    for stop in &document.stops {
        db.insert_stop(stop)?;
    }
    for &(from, to) in &pairs {
        db.insert_connection(from, to)?;
    }

    match ctx.format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "database": ctx.database,
                "stops": graph.stop_count(),
                "connections": graph.connection_count(),
            });
            println!("{}", payload);
        }
        OutputFormat::Human => {
            if !ctx.quiet {
                println!(
                    "imported {} stops and {} connections into {}",
                    graph.stop_count(),
                    graph.connection_count(),
                    ctx.database.display()
                );
            }
        }
    }

    Ok(())
}
