use super::*;
use crate::error::MetroError;
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
fn breadth_first_visits_line_in_order() {
    let visitation = breadth_first(&line(), 1).unwrap();
    assert_eq!(ids(&visitation), vec![1, 2, 3]);
}

#[test]
fn breadth_first_layers_diamond_by_distance() {
    let visitation = breadth_first(&diamond(), 1).unwrap();
    // 2 and 3 at one hop (in connection insertion order), 4 at two hops.
    assert_eq!(ids(&visitation), vec![1, 2, 3, 4]);
}

#[test]
fn depth_first_goes_deep_before_backtracking() {
    let visitation = depth_first(&diamond(), 1).unwrap();
    // First connection 1->2 is followed down to 4 before 3 is taken.
    assert_eq!(ids(&visitation), vec![1, 2, 4, 3]);
}

#[test]
fn traversals_omit_unreachable_stops() {
    // Connections are directed: nothing leads back to 1 from 2.
    let visitation = breadth_first(&line(), 2).unwrap();
    assert_eq!(ids(&visitation), vec![2, 3]);

    let visitation = depth_first(&line(), 3).unwrap();
    assert_eq!(ids(&visitation), vec![3]);
}

#[test]
fn each_reachable_stop_appears_exactly_once() {
    // Diamond re-examines 4 through both 2 and 3.
    let visitation = breadth_first(&diamond(), 1).unwrap();
    assert_eq!(visitation.len(), 4);

    let visitation = depth_first(&diamond(), 1).unwrap();
    assert_eq!(visitation.len(), 4);
}

#[test]
fn repeated_queries_are_identical() {
    let graph = diamond();
    assert_eq!(
        ids(&breadth_first(&graph, 1).unwrap()),
        ids(&breadth_first(&graph, 1).unwrap())
    );
    assert_eq!(
        ids(&depth_first(&graph, 1).unwrap()),
        ids(&depth_first(&graph, 1).unwrap())
    );
}

#[test]
fn unknown_start_fails() {
    let err = breadth_first(&line(), 9).unwrap_err();
    assert!(matches!(err, MetroError::UnknownStop { id: 9 }));

    let err = depth_first(&line(), 9).unwrap_err();
    assert!(matches!(err, MetroError::UnknownStop { id: 9 }));
}
