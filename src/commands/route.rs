//! Route command: minimum-hop shortest path
use std::time::Instant;

use super::dispatch::{load_graph, Context};
use crate::cli::OutputFormat;
use metrograph_core::error::{MetroError, Result};
use metrograph_core::graph::shortest_path;
use metrograph_core::stop::Stop;

/// Execute the route command
pub fn execute(ctx: &Context, from: i64, to: i64, start: Instant) -> Result<()> {
    let graph = load_graph(ctx, start)?;

    // An unreachable destination is a normal outcome for the caller, not
    // a failure.
    let route = match shortest_path(&graph, from, to) {
        Ok(route) => Some(route),
        Err(MetroError::NoRoute { .. }) => None,
        Err(e) => return Err(e),
    };

    match ctx.format {
        OutputFormat::Json => output_json(from, to, route.as_deref()),
        OutputFormat::Human => output_human(ctx, from, to, route.as_deref()),
    }

    Ok(())
}

fn output_json(from: i64, to: i64, route: Option<&[Stop]>) {
    let payload = match route {
        Some(route) => serde_json::json!({
            "from": from,
            "to": to,
            "found": true,
            "hops": route.len().saturating_sub(1),
            "stops": route,
        }),
        None => serde_json::json!({
            "from": from,
            "to": to,
            "found": false,
        }),
    };
    println!("{}", payload);
}

fn output_human(ctx: &Context, from: i64, to: i64, route: Option<&[Stop]>) {
    match route {
        Some(route) => {
            for stop in route {
                println!("{}", stop);
            }
            if !ctx.quiet {
                eprintln!(
                    "{} hops from {} to {}",
                    route.len().saturating_sub(1),
                    from,
                    to
                );
            }
        }
        None => println!("no route from {} to {}", from, to),
    }
}
