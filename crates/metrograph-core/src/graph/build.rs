//! Graph construction: mutable builder, frozen graph.

use std::collections::{HashMap, HashSet};

use crate::error::{MetroError, Result};
use crate::repository::StopRepository;
use crate::stop::Stop;

/// Mutable construction phase for a [`TransitGraph`].
///
/// Consumed by [`GraphBuilder::finish`]; the frozen graph exposes no
/// mutating methods, so every query runs over an immutable structure.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    stops: Vec<Stop>,
    slots: HashMap<i64, usize>,
    outgoing: Vec<Vec<usize>>,
    connections: HashSet<(usize, usize)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop. Fails if the id is already present.
    pub fn add_stop(&mut self, stop: Stop) -> Result<()> {
        if self.slots.contains_key(&stop.id) {
            return Err(MetroError::DuplicateStop { id: stop.id });
        }
        self.slots.insert(stop.id, self.stops.len());
        self.stops.push(stop);
        self.outgoing.push(Vec::new());
        Ok(())
    }

    /// Insert a directed connection between two registered stops.
    ///
    /// Connections are kept in insertion order per source stop; that
    /// order decides every tie-break in the traversal algorithms.
    pub fn connect(&mut self, from: i64, to: i64) -> Result<()> {
        let from_slot = self.slot(from)?;
        let to_slot = self.slot(to)?;
        if from_slot == to_slot {
            return Err(MetroError::SelfLoop { id: from });
        }
        if !self.connections.insert((from_slot, to_slot)) {
            return Err(MetroError::DuplicateConnection { from, to });
        }
        self.outgoing[from_slot].push(to_slot);
        Ok(())
    }

    /// Freeze the graph.
    pub fn finish(self) -> TransitGraph {
        TransitGraph {
            stops: self.stops,
            slots: self.slots,
            outgoing: self.outgoing,
            connections: self.connections,
        }
    }

    fn slot(&self, id: i64) -> Result<usize> {
        self.slots
            .get(&id)
            .copied()
            .ok_or(MetroError::UnknownStop { id })
    }
}

/// Build a graph from two already-materialized sequences.
#[tracing::instrument(skip(stops, pairs), fields(stops = stops.len(), pairs = pairs.len()))]
pub fn build_graph(stops: Vec<Stop>, pairs: &[(i64, i64)]) -> Result<TransitGraph> {
    let mut builder = GraphBuilder::new();
    for stop in stops {
        builder.add_stop(stop)?;
    }
    for &(from, to) in pairs {
        builder.connect(from, to)?;
    }
    Ok(builder.finish())
}

/// Build a graph from a repository, consuming its two listings once.
pub fn build_from_repository(repo: &dyn StopRepository) -> Result<TransitGraph> {
    let stops = repo.list_stops()?;
    let pairs = repo.list_connections()?;
    let graph = build_graph(stops, &pairs)?;
    tracing::debug!(
        stops = graph.stop_count(),
        connections = graph.connection_count(),
        "graph_loaded"
    );
    Ok(graph)
}

/// Frozen directed graph of stops and their connections.
///
/// Built exactly once; all accessors are read-only. Per-stop outgoing
/// connections keep their insertion order.
#[derive(Debug)]
pub struct TransitGraph {
    stops: Vec<Stop>,
    slots: HashMap<i64, usize>,
    outgoing: Vec<Vec<usize>>,
    connections: HashSet<(usize, usize)>,
}

impl TransitGraph {
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn stop(&self, id: i64) -> Option<&Stop> {
        self.slots.get(&id).map(|&slot| &self.stops[slot])
    }

    /// Outgoing neighbors of a stop, in connection insertion order.
    pub fn neighbors(&self, id: i64) -> Result<Vec<&Stop>> {
        let slot = self.slot(id)?;
        Ok(self.outgoing[slot]
            .iter()
            .map(|&next| &self.stops[next])
            .collect())
    }

    pub fn has_connection(&self, from: i64, to: i64) -> bool {
        match (self.slots.get(&from), self.slots.get(&to)) {
            (Some(&a), Some(&b)) => self.connections.contains(&(a, b)),
            _ => false,
        }
    }

    pub(crate) fn slot(&self, id: i64) -> Result<usize> {
        self.slots
            .get(&id)
            .copied()
            .ok_or(MetroError::UnknownStop { id })
    }

    pub(crate) fn stop_at(&self, slot: usize) -> &Stop {
        &self.stops[slot]
    }

    pub(crate) fn outgoing_slots(&self, slot: usize) -> &[usize] {
        &self.outgoing[slot]
    }
}
