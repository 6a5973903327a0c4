//! Breadth-first and depth-first visitation.

use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::TransitGraph;
use crate::stop::Stop;

/// Visit every stop reachable from `start`, nearest first.
///
/// Stops at equal hop distance are discovered in the order their
/// connections were inserted at construction time, so the sequence is
/// reproducible for a fixed graph and start stop.
#[tracing::instrument(skip(graph), fields(start = start))]
pub fn breadth_first(graph: &TransitGraph, start: i64) -> Result<Vec<Stop>> {
    let start_slot = graph.slot(start)?;

    let mut discovered = vec![false; graph.stop_count()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut visitation = Vec::new();

    discovered[start_slot] = true;
    queue.push_back(start_slot);

    while let Some(current) = queue.pop_front() {
        visitation.push(graph.stop_at(current).clone());
        for &next in graph.outgoing_slots(current) {
            if !discovered[next] {
                discovered[next] = true;
                queue.push_back(next);
            }
        }
    }

    Ok(visitation)
}

/// Visit every stop reachable from `start`, following the first outgoing
/// connection as deep as possible before backtracking.
#[tracing::instrument(skip(graph), fields(start = start))]
pub fn depth_first(graph: &TransitGraph, start: i64) -> Result<Vec<Stop>> {
    let start_slot = graph.slot(start)?;

    let mut discovered = vec![false; graph.stop_count()];
    let mut stack = vec![start_slot];
    let mut visitation = Vec::new();

    while let Some(current) = stack.pop() {
        if discovered[current] {
            continue;
        }
        discovered[current] = true;
        visitation.push(graph.stop_at(current).clone());

        // Reversed so the first-inserted connection is explored first.
        for &next in graph.outgoing_slots(current).iter().rev() {
            if !discovered[next] {
                stack.push(next);
            }
        }
    }

    Ok(visitation)
}

#[cfg(test)]
mod tests;
