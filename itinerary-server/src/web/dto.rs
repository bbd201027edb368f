//! Data transfer objects for web requests and responses.
//!
//! Request bodies are plain JSON arrays of `[origin, destination]` pairs and
//! are decoded straight into `Vec<Vec<String>>`, so only responses need
//! dedicated types.

use serde::{Deserialize, Serialize};

use crate::domain::Airport;
use crate::itinerary::{ItineraryReport, StartSource};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status message
    pub data: String,
}

/// Full itinerary response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItineraryResponse {
    /// Airports in travel order
    pub itinerary: Vec<String>,

    /// Whether every segment was used
    pub complete: bool,

    /// Segments left out of the itinerary
    pub unused_segments: usize,

    /// How the starting airport was chosen
    pub start_source: String,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl ItineraryResponse {
    /// Create from a service report.
    pub fn from_report(report: ItineraryReport) -> Self {
        let complete = report.is_complete();
        let start_source = match report.start_source {
            StartSource::PathImbalance => "path",
            StartSource::Circuit => "circuit",
            StartSource::LongestPath => "longest",
            StartSource::FirstDeparture => "departure",
        };

        Self {
            itinerary: report
                .itinerary
                .into_airports()
                .into_iter()
                .map(Airport::into_inner)
                .collect(),
            complete,
            unused_segments: report.unused_segments,
            start_source: start_source.to_string(),
        }
    }
}
