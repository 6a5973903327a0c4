//! Spanning-tree reconstruction from a breadth-first walk.

use std::collections::{HashMap, VecDeque};

use crate::error::Result;
use crate::graph::TransitGraph;

/// Parent map of a breadth-first spanning tree: each reachable stop id
/// mapped to the id of the stop that discovered it, `None` for the root.
pub type ParentMap = HashMap<i64, Option<i64>>;

/// Reconstruct the spanning tree of a breadth-first walk from `start`.
///
/// The parent relation is derived from the stream of connections the
/// walk examines rather than read off the traversal bookkeeping: for
/// every examined connection (a, b), whichever endpoint already has an
/// entry becomes the parent of the one that does not, and a connection
/// between two settled stops leaves the map unchanged. The map doubles
/// as the discovery marker, so each non-root stop receives its entry
/// exactly once, at the moment it moves from undiscovered to discovered.
/// Following parent links from any reachable stop therefore reaches
/// `start` without cycles.
///
/// Which of several valid spanning trees comes out depends on connection
/// insertion order, which is pinned at construction time.
#[tracing::instrument(skip(graph), fields(start = start))]
pub fn spanning_tree(graph: &TransitGraph, start: i64) -> Result<ParentMap> {
    let start_slot = graph.slot(start)?;

    let mut parents = ParentMap::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    parents.insert(start, None);
    queue.push_back(start_slot);

    while let Some(current) = queue.pop_front() {
        let a = graph.stop_at(current).id;
        for &next in graph.outgoing_slots(current) {
            let b = graph.stop_at(next).id;
            if parents.contains_key(&a) && !parents.contains_key(&b) {
                parents.insert(b, Some(a));
                queue.push_back(next);
            } else if parents.contains_key(&b) && !parents.contains_key(&a) {
                parents.insert(a, Some(b));
                queue.push_back(current);
            }
            // Both settled: cross connection, no update.
        }
    }

    Ok(parents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetroError;
    use crate::graph::build_graph;
    use crate::stop::Stop;

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

    #[test]
    fn line_parents_follow_the_walk() {
        let parents = spanning_tree(&line(), 1).unwrap();

        assert_eq!(parents.len(), 3);
        assert_eq!(parents[&1], None);
        assert_eq!(parents[&2], Some(1));
        assert_eq!(parents[&3], Some(2));
    }

    #[test]
    fn diamond_cross_connection_is_a_no_op() {
        let parents = spanning_tree(&diamond(), 1).unwrap();

        // 4 was discovered through 2 (inserted first); the later 3->4
        // connection finds both endpoints settled and changes nothing.
        assert_eq!(parents[&1], None);
        assert_eq!(parents[&2], Some(1));
        assert_eq!(parents[&3], Some(1));
        assert_eq!(parents[&4], Some(2));
    }

    #[test]
    fn parent_links_reach_the_root_acyclically() {
        let graph = diamond();
        let parents = spanning_tree(&graph, 1).unwrap();

        for &stop in parents.keys() {
            let mut current = stop;
            let mut steps = 0;
            while let Some(Some(parent)) = parents.get(&current) {
                current = *parent;
                steps += 1;
                assert!(steps <= graph.stop_count(), "cycle via stop {}", stop);
            }
            assert_eq!(current, 1);
        }
    }

    #[test]
    fn unreachable_stops_get_no_entry() {
        let parents = spanning_tree(&line(), 2).unwrap();

        assert_eq!(parents.len(), 2);
        assert!(!parents.contains_key(&1));
    }

    #[test]
    fn repeated_queries_are_identical() {
        let graph = diamond();
        assert_eq!(
            spanning_tree(&graph, 1).unwrap(),
            spanning_tree(&graph, 1).unwrap()
        );
    }

    #[test]
    fn unknown_start_fails() {
        let err = spanning_tree(&line(), 9).unwrap_err();
        assert!(matches!(err, MetroError::UnknownStop { id: 9 }));
    }
}
