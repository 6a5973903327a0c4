//! Tree command: breadth-first spanning tree
use std::time::Instant;

use super::dispatch::{load_graph, Context};
use crate::cli::OutputFormat;
use metrograph_core::error::Result;
use metrograph_core::graph::{spanning_tree, TransitGraph};

/// Execute the tree command
pub fn execute(ctx: &Context, root: i64, start: Instant) -> Result<()> {
    let graph = load_graph(ctx, start)?;
    let parents = spanning_tree(&graph, root)?;

    // Sort by child id for stable output.
    let mut entries: Vec<(i64, Option<i64>)> = parents.into_iter().collect();
    entries.sort_by_key(|&(child, _)| child);

    match ctx.format {
        OutputFormat::Json => {
            let tree: Vec<_> = entries
                .iter()
                .map(|&(child, parent)| {
                    serde_json::json!({
                        "stop": child,
                        "parent": parent,
                    })
                })
                .collect();
            println!("{}", serde_json::json!({ "root": root, "tree": tree }));
        }
        OutputFormat::Human => {
            for (child, parent) in entries {
                match parent {
                    Some(parent) => {
                        println!("{} <- {}", label(&graph, child), label(&graph, parent));
                    }
                    None => println!("{} <- (root)", label(&graph, child)),
                }
            }
        }
    }

    Ok(())
}

fn label(graph: &TransitGraph, id: i64) -> String {
    match graph.stop(id) {
        Some(stop) => stop.to_string(),
        None => id.to_string(),
    }
}
