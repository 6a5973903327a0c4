//! Network info command
use std::time::Instant;

use super::dispatch::{load_graph, Context};
use crate::cli::OutputFormat;
use metrograph_core::error::Result;

/// Execute the info command
pub fn execute(ctx: &Context, start: Instant) -> Result<()> {
    let graph = load_graph(ctx, start)?;

    match ctx.format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "stops": graph.stop_count(),
                "connections": graph.connection_count(),
            });
            println!("{}", payload);
        }
        OutputFormat::Human => {
            println!(
                "graph loaded with {} stops and {} connections",
                graph.stop_count(),
                graph.connection_count()
            );
        }
    }

    Ok(())
}
