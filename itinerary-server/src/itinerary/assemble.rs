//! Itinerary assembly.
//!
//! Walks a [`FlightGraph`] with Hierholzer's algorithm, using an explicit
//! stack instead of recursion so long chains cannot exhaust the call stack.

use tracing::trace;

use super::graph::FlightGraph;
use crate::domain::{Airport, Itinerary};

/// Result of one assembly run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// The assembled path, starting at the requested airport.
    pub itinerary: Itinerary,

    /// Edges the walk could not reach from the start.
    pub unused_edges: usize,
}

impl Assembly {
    /// Returns true if every edge of the graph was used.
    pub fn is_complete(&self) -> bool {
        self.unused_edges == 0
    }
}

/// Assemble an itinerary starting from `start`, consuming the graph.
///
/// Whenever an airport has several unconsumed departures, the smallest
/// destination is taken first. The result is a valid Eulerian trail only
/// when one exists from `start`; edges outside the reachable part of the
/// graph are left over and reported in [`Assembly::unused_edges`].
///
/// An airport with no departures yields the single-airport itinerary.
pub fn assemble(mut graph: FlightGraph, start: &Airport) -> Assembly {
    let Some(start_node) = graph.node(start) else {
        return Assembly {
            itinerary: Itinerary::from_airports(vec![start.clone()]),
            unused_edges: graph.remaining_edges(),
        };
    };

    let mut stack = vec![start_node];
    let mut path = Vec::with_capacity(graph.remaining_edges() + 1);

    while let Some(&current) = stack.last() {
        match graph.take_edge(current) {
            Some(next) => stack.push(next),
            None => {
                // Dead end: every departure from here is used up
                path.push(current);
                stack.pop();
            }
        }
    }

    path.reverse();

    trace!(
        start = %start,
        nodes = graph.node_count(),
        airports = path.len(),
        unused = graph.remaining_edges(),
        "assembled itinerary"
    );

    Assembly {
        itinerary: Itinerary::from_airports(
            path.into_iter().map(|id| graph.airport(id).clone()).collect(),
        ),
        unused_edges: graph.remaining_edges(),
    }
}
