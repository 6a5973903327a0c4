//! Directed transit graph and its traversal algorithms.

pub mod build;
pub mod path;
pub mod spanning;
pub mod traversal;

pub use build::{build_from_repository, build_graph, GraphBuilder, TransitGraph};
pub use path::shortest_path;
pub use spanning::{spanning_tree, ParentMap};
pub use traversal::{breadth_first, depth_first};
