//! Assembled itineraries.

use super::{Airport, Segment};

/// An ordered sequence of airports visited by a traveler.
///
/// Each consecutive pair corresponds to exactly one flight segment, so an
/// itinerary over `n` segments holds `n + 1` airports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary(Vec<Airport>);

impl Itinerary {
    /// Wrap an already ordered list of airports.
    pub fn from_airports(airports: Vec<Airport>) -> Self {
        Self(airports)
    }

    /// The airports in travel order.
    pub fn airports(&self) -> &[Airport] {
        &self.0
    }

    /// Number of airports visited.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no airport was visited.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of flight segments flown.
    pub fn segment_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// First airport of the journey.
    pub fn start(&self) -> Option<&Airport> {
        self.0.first()
    }

    /// Last airport of the journey.
    pub fn end(&self) -> Option<&Airport> {
        self.0.last()
    }

    /// Decompose into the flight segments flown, in travel order.
    pub fn segments(&self) -> Vec<Segment> {
        self.0
            .windows(2)
            .map(|pair| Segment::new(pair[0].clone(), pair[1].clone()))
            .collect()
    }

    /// Consumes the itinerary and returns the airports.
    pub fn into_airports(self) -> Vec<Airport> {
        self.0
    }
}
