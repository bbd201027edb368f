//! Itinerary orchestration.
//!
//! Answers the two questions callers ask: "what is the full itinerary?"
//! (build a graph, pick a start, assemble) and "where does the journey start
//! and end?" (delegate to an endpoint detector).

use std::collections::HashSet;

use tracing::{debug, warn};

use super::assemble::{Assembly, assemble};
use super::concurrent::detect_endpoints_concurrent;
use super::config::{DetectorKind, ItineraryConfig, StartSelection};
use super::endpoints::{DegreeProfile, EndpointError, EndpointPair, degree_profile, detect_endpoints};
use super::graph::FlightGraph;
use crate::domain::{Airport, Itinerary, Segment};

/// Error from the itinerary service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItineraryError {
    /// No segments were supplied
    #[error("no flight segments supplied")]
    Empty,

    /// Endpoint detection failed
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
}

/// Where the assembly start came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartSource {
    /// The unique airport with one more departure than arrivals.
    PathImbalance,

    /// All airports balanced; smallest origin chosen.
    Circuit,

    /// Every origin tried; the longest itinerary kept.
    LongestPath,

    /// Unbalanced input too large for the longest-path search; the first
    /// airport that is never a destination was used.
    FirstDeparture,
}

/// A full itinerary together with how trustworthy it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryReport {
    /// The assembled itinerary.
    pub itinerary: Itinerary,

    /// How the starting airport was chosen.
    pub start_source: StartSource,

    /// Segments the itinerary could not include. Non-zero means the input
    /// was not one connected journey.
    pub unused_segments: usize,
}

impl ItineraryReport {
    fn from_assembly(assembly: Assembly, start_source: StartSource) -> Self {
        Self {
            itinerary: assembly.itinerary,
            start_source,
            unused_segments: assembly.unused_edges,
        }
    }

    /// Returns true if every segment appears in the itinerary.
    pub fn is_complete(&self) -> bool {
        self.unused_segments == 0
    }
}

/// Reconstructs itineraries and journey endpoints from flight segments.
///
/// Stateless between calls: every request builds its own graphs.
#[derive(Debug, Clone, Default)]
pub struct ItineraryService {
    config: ItineraryConfig,
}

impl ItineraryService {
    /// Create a new service.
    pub fn new(config: ItineraryConfig) -> Self {
        Self { config }
    }

    /// The service configuration.
    pub fn config(&self) -> &ItineraryConfig {
        &self.config
    }

    /// Assemble the full itinerary.
    ///
    /// With [`StartSelection::DegreeBalance`] the start comes from the degree
    /// profile; unbalanced input falls back to the longest-path search.
    /// Disconnected input is not an error: the report's `unused_segments`
    /// says how much was left out.
    pub fn full_itinerary(&self, segments: &[Segment]) -> Result<ItineraryReport, ItineraryError> {
        let report = match self.config.start_selection {
            StartSelection::LongestPath => longest_path(segments)?,
            StartSelection::DegreeBalance => match degree_profile(segments) {
                DegreeProfile::Empty => return Err(ItineraryError::Empty),
                DegreeProfile::Path { start, .. } => ItineraryReport::from_assembly(
                    assemble(FlightGraph::build(segments), &start),
                    StartSource::PathImbalance,
                ),
                DegreeProfile::Circuit { start } => ItineraryReport::from_assembly(
                    assemble(FlightGraph::build(segments), &start),
                    StartSource::Circuit,
                ),
                DegreeProfile::Unbalanced { imbalanced }
                    if segments.len() > self.config.max_fallback_segments =>
                {
                    warn!(
                        imbalanced,
                        segments = segments.len(),
                        limit = self.config.max_fallback_segments,
                        "no Eulerian trail and too many segments to try every origin"
                    );
                    first_departure(segments)?
                }
                DegreeProfile::Unbalanced { imbalanced } => {
                    debug!(imbalanced, "no Eulerian trail, trying every origin");
                    longest_path(segments)?
                }
            },
        };

        debug!(
            segments = segments.len(),
            flown = report.itinerary.segment_count(),
            unused = report.unused_segments,
            source = ?report.start_source,
            "itinerary assembled"
        );

        Ok(report)
    }

    /// Find where the journey starts and ends, using the configured detector.
    pub async fn endpoints(&self, segments: &[Segment]) -> Result<EndpointPair, ItineraryError> {
        let pair = match self.config.detector {
            DetectorKind::Sequential => detect_endpoints(segments)?,
            DetectorKind::Concurrent => detect_endpoints_concurrent(segments).await?,
        };

        debug!(
            start = %pair.start,
            end = %pair.end,
            detector = %self.config.detector,
            "endpoints detected"
        );

        Ok(pair)
    }
}

/// Try every distinct origin as the start and keep the longest itinerary.
///
/// Origins are tried in ascending order and only a strictly longer result
/// replaces the current best, so ties go to the smallest start.
fn longest_path(segments: &[Segment]) -> Result<ItineraryReport, ItineraryError> {
    let graph = FlightGraph::build(segments);
    let candidates: Vec<Airport> = graph.origins().into_iter().cloned().collect();
    debug!(
        origins = candidates.len(),
        airports = graph.node_count(),
        "searching for the longest itinerary"
    );

    let mut best: Option<Assembly> = None;
    for start in &candidates {
        let assembly = assemble(FlightGraph::build(segments), start);
        if best
            .as_ref()
            .is_none_or(|b| assembly.itinerary.len() > b.itinerary.len())
        {
            best = Some(assembly);
        }
    }

    best.map(|assembly| ItineraryReport::from_assembly(assembly, StartSource::LongestPath))
        .ok_or(ItineraryError::Empty)
}

/// Assemble once from the first airport (input order) that is never a
/// destination, or from the smallest origin if every airport is one.
fn first_departure(segments: &[Segment]) -> Result<ItineraryReport, ItineraryError> {
    let graph = FlightGraph::build(segments);
    let arrivals: HashSet<&Airport> = segments.iter().map(|s| &s.destination).collect();
    let start = segments
        .iter()
        .map(|s| &s.origin)
        .find(|origin| !arrivals.contains(origin))
        .or_else(|| graph.origins().first().copied())
        .cloned()
        .ok_or(ItineraryError::Empty)?;

    Ok(ItineraryReport::from_assembly(
        assemble(graph, &start),
        StartSource::FirstDeparture,
    ))
}
