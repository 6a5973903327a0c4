//! Read-only contract between the stop data source and the graph store.

use crate::error::Result;
use crate::stop::Stop;

/// Supplies the full stop and connection listings of a network.
///
/// Consumed exactly once, at graph construction time; both listings must
/// be complete and already materialized before construction proceeds.
/// How the data is held (SQLite file, fixture, anything else) is the
/// implementor's business.
pub trait StopRepository {
    /// Every stop in the network.
    fn list_stops(&self) -> Result<Vec<Stop>>;

    /// Every directed connected pair, in load order.
    ///
    /// Load order matters: the graph keeps per-stop connections in the
    /// order they arrive, and every traversal tie-break downstream
    /// follows that order.
    fn list_connections(&self) -> Result<Vec<(i64, i64)>>;
}
