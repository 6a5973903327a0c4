//! Visit command: full reachability traversal
use std::time::Instant;

use super::dispatch::{load_graph, Context};
use crate::cli::{OutputFormat, Strategy};
use metrograph_core::error::Result;
use metrograph_core::graph::{breadth_first, depth_first};
use metrograph_core::trace_time;

/// Execute the visit command
pub fn execute(ctx: &Context, stop: i64, strategy: Strategy, start: Instant) -> Result<()> {
    let graph = load_graph(ctx, start)?;

    let visitation = match strategy {
        Strategy::Bfs => breadth_first(&graph, stop)?,
        Strategy::Dfs => depth_first(&graph, stop)?,
    };
    trace_time!(start, "visit", strategy = strategy.as_str());

    match ctx.format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "start": stop,
                "strategy": strategy.as_str(),
                "stops": visitation,
            });
            println!("{}", payload);
        }
        OutputFormat::Human => {
            for visited in &visitation {
                println!("{}", visited);
            }
            if !ctx.quiet {
                eprintln!("{} stops reachable from {}", visitation.len(), stop);
            }
        }
    }

    Ok(())
}
