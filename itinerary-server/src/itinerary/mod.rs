//! Itinerary reconstruction engine.
//!
//! This module turns an unordered bag of flight segments back into a
//! journey. It answers two questions:
//!
//! - the full itinerary, assembled with Hierholzer's algorithm over a
//!   graph whose departures are tried in lexicographic order;
//! - just the start and end airports, found by a sequential O(n) pass or by
//!   a parallel one-task-per-segment detector.

mod assemble;
mod concurrent;
mod config;
mod endpoints;
mod graph;
mod service;
#[cfg(test)]
mod test_data;

pub use assemble::{Assembly, assemble};
pub use concurrent::detect_endpoints_concurrent;
pub use config::{
    DEFAULT_MAX_FALLBACK_SEGMENTS, DetectorKind, ItineraryConfig, StartSelection, UnknownSetting,
};
pub use endpoints::{DegreeProfile, EndpointError, EndpointPair, degree_profile, detect_endpoints};
pub use graph::FlightGraph;
pub use service::{ItineraryError, ItineraryReport, ItineraryService, StartSource};
