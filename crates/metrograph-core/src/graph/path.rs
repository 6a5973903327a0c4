//! Minimum-hop route search.

use std::collections::VecDeque;

use crate::error::{MetroError, Result};
use crate::graph::TransitGraph;
use crate::stop::Stop;

/// Minimum-hop route between two stops, endpoints inclusive.
///
/// Unweighted breadth-first search with a predecessor map; ties among
/// equal-length routes follow connection insertion order, so the result
/// is stable for a fixed graph. Fails with [`MetroError::NoRoute`] when
/// the destination cannot be reached; callers treat that as a normal
/// "no route" outcome rather than a fault.
#[tracing::instrument(skip(graph), fields(from = from, to = to))]
pub fn shortest_path(graph: &TransitGraph, from: i64, to: i64) -> Result<Vec<Stop>> {
    let from_slot = graph.slot(from)?;
    let to_slot = graph.slot(to)?;

    let mut discovered = vec![false; graph.stop_count()];
    let mut predecessors: Vec<Option<usize>> = vec![None; graph.stop_count()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    discovered[from_slot] = true;
    queue.push_back(from_slot);

    let mut found = from_slot == to_slot;

    'search: while let Some(current) = queue.pop_front() {
        for &next in graph.outgoing_slots(current) {
            if discovered[next] {
                continue;
            }
            discovered[next] = true;
            predecessors[next] = Some(current);
            if next == to_slot {
                found = true;
                break 'search;
            }
            queue.push_back(next);
        }
    }

    if !found {
        return Err(MetroError::NoRoute { from, to });
    }

    // Backtrack from the destination, then flip.
    let mut route = vec![graph.stop_at(to_slot).clone()];
    let mut current = to_slot;
    while current != from_slot {
        match predecessors[current] {
            Some(pred) => {
                route.push(graph.stop_at(pred).clone());
                current = pred;
            }
            None => break,
        }
    }
    route.reverse();

    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    fn line() -> TransitGraph {
        let stops = vec![
            Stop::new(1, "Alpha"),
            Stop::new(2, "Bravo"),
            Stop::new(3, "Charlie"),
        ];
        build_graph(stops, &[(1, 2), (2, 3)]).unwrap()
    }

    fn diamond() -> TransitGraph {
        let stops = vec![
            Stop::new(1, "Alpha"),
            Stop::new(2, "Bravo"),
            Stop::new(3, "Charlie"),
            Stop::new(4, "Delta"),
        ];
        build_graph(stops, &[(1, 2), (1, 3), (2, 4), (3, 4)]).unwrap()
    }

    fn ids(stops: &[Stop]) -> Vec<i64> {
        stops.iter().map(|s| s.id).collect()
    }

    #[test]
    fn finds_route_along_the_line() {
        let route = shortest_path(&line(), 1, 3).unwrap();
        assert_eq!(ids(&route), vec![1, 2, 3]);
    }

    #[test]
    fn route_steps_only_along_connections() {
        let graph = diamond();
        let route = shortest_path(&graph, 1, 4).unwrap();
        for pair in route.windows(2) {
            assert!(graph.has_connection(pair[0].id, pair[1].id));
        }
    }

    #[test]
    fn diamond_tie_breaks_on_insertion_order() {
        // Both 1-2-4 and 1-3-4 are two hops; 1->2 was inserted first.
        let route = shortest_path(&diamond(), 1, 4).unwrap();
        assert_eq!(ids(&route), vec![1, 2, 4]);
    }

    #[test]
    fn same_source_and_destination_is_a_zero_hop_route() {
        let route = shortest_path(&line(), 2, 2).unwrap();
        assert_eq!(ids(&route), vec![2]);
    }

    #[test]
    fn backward_route_does_not_exist() {
        // Connections are directed; nothing leads from 3 back to 1.
        let err = shortest_path(&line(), 3, 1).unwrap_err();
        assert!(matches!(err, MetroError::NoRoute { from: 3, to: 1 }));
    }

    #[test]
    fn unknown_endpoints_fail() {
        let graph = line();
        assert!(matches!(
            shortest_path(&graph, 9, 1),
            Err(MetroError::UnknownStop { id: 9 })
        ));
        assert!(matches!(
            shortest_path(&graph, 1, 9),
            Err(MetroError::UnknownStop { id: 9 })
        ));
    }

    #[test]
    fn repeated_queries_are_identical() {
        let graph = diamond();
        assert_eq!(
            ids(&shortest_path(&graph, 1, 4).unwrap()),
            ids(&shortest_path(&graph, 1, 4).unwrap())
        );
    }
}
