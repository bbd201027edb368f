//! Flight graph construction.
//!
//! Segments are interned into dense node ids so assembly can work on plain
//! vectors: each node owns the sorted list of its destinations plus a cursor
//! marking how many of them have been consumed.

use std::collections::HashMap;

use crate::domain::{Airport, Segment};

/// Adjacency structure over airports, consumed edge by edge during assembly.
///
/// Destinations of each airport are kept in ascending order, so the first
/// unconsumed edge is always the lexicographically smallest one.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    /// Airport for each node id.
    airports: Vec<Airport>,

    /// Node id for each airport.
    index: HashMap<Airport, usize>,

    /// Destinations per node, sorted ascending.
    edges: Vec<Vec<usize>>,

    /// Next unconsumed position in `edges[node]`.
    cursor: Vec<usize>,

    /// Total number of edges, consumed or not.
    edge_count: usize,

    /// Number of edges consumed so far.
    consumed: usize,
}

impl FlightGraph {
    /// Build a graph from flight segments.
    ///
    /// Segments are ordered by `(origin, destination)` before insertion. The
    /// input slice itself is left untouched. Duplicate segments become
    /// parallel edges, each consumed independently.
    pub fn build(segments: &[Segment]) -> Self {
        let mut sorted: Vec<&Segment> = segments.iter().collect();
        sorted.sort();

        let mut graph = Self::default();
        for segment in sorted {
            let from = graph.intern(&segment.origin);
            let to = graph.intern(&segment.destination);
            graph.edges[from].push(to);
        }
        graph.edge_count = segments.len();

        graph
    }

    fn intern(&mut self, airport: &Airport) -> usize {
        if let Some(&id) = self.index.get(airport) {
            return id;
        }
        let id = self.airports.len();
        self.airports.push(airport.clone());
        self.index.insert(airport.clone(), id);
        self.edges.push(Vec::new());
        self.cursor.push(0);
        id
    }

    /// Total number of edges the graph was built with.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of edges not yet consumed.
    pub fn remaining_edges(&self) -> usize {
        self.edge_count - self.consumed
    }

    /// Returns true once every edge has been consumed.
    pub fn is_drained(&self) -> bool {
        self.consumed == self.edge_count
    }

    /// Number of distinct airports.
    pub fn node_count(&self) -> usize {
        self.airports.len()
    }

    /// Distinct airports with at least one outgoing edge, in ascending order.
    pub fn origins(&self) -> Vec<&Airport> {
        let mut origins: Vec<&Airport> = self
            .edges
            .iter()
            .enumerate()
            .filter(|(_, dests)| !dests.is_empty())
            .map(|(id, _)| &self.airports[id])
            .collect();
        origins.sort();
        origins
    }

    /// Unconsumed destinations from `airport`, smallest first.
    pub fn destinations_from<'a>(
        &'a self,
        airport: &Airport,
    ) -> impl Iterator<Item = &'a Airport> + use<'a> {
        let remaining: &[usize] = match self.index.get(airport) {
            Some(&id) => &self.edges[id][self.cursor[id]..],
            None => &[],
        };
        remaining.iter().map(move |&to| &self.airports[to])
    }

    pub(super) fn node(&self, airport: &Airport) -> Option<usize> {
        self.index.get(airport).copied()
    }

    pub(super) fn airport(&self, node: usize) -> &Airport {
        &self.airports[node]
    }

    /// Consume the smallest remaining edge out of `node`, returning its target.
    pub(super) fn take_edge(&mut self, node: usize) -> Option<usize> {
        let pos = self.cursor[node];
        let next = *self.edges[node].get(pos)?;
        self.cursor[node] = pos + 1;
        self.consumed += 1;
        Some(next)
    }
}
