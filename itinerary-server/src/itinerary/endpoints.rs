//! Journey endpoint detection.
//!
//! Finds where a journey starts and ends without assembling the full
//! itinerary, and classifies the degree balance of a segment set so the
//! assembler knows where an Eulerian trail must begin.

use std::collections::{HashMap, HashSet};

use crate::domain::{Airport, Segment};

/// Start and end of a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPair {
    /// The airport that is never a destination.
    pub start: Airport,

    /// The airport that is never an origin.
    pub end: Airport,
}

/// Error from endpoint detection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    /// No segments to inspect
    #[error("no flight segments supplied")]
    Empty,

    /// Every origin is also somebody's destination
    #[error("no starting airport: every origin is also a destination")]
    NoStart,

    /// Every destination is also somebody's origin
    #[error("no final airport: every destination is also an origin")]
    NoEnd,

    /// A detection task panicked or was cancelled
    #[error("endpoint detection task failed: {0}")]
    TaskFailed(String),
}

/// Detect the journey's start and end in a single O(n) pass.
///
/// The start is the origin of the first segment (in input order) whose
/// origin never appears as a destination; the end is the destination of the
/// first segment whose destination never appears as an origin. For a set
/// forming a single path these are unique.
pub fn detect_endpoints(segments: &[Segment]) -> Result<EndpointPair, EndpointError> {
    if segments.is_empty() {
        return Err(EndpointError::Empty);
    }

    let origins: HashSet<&Airport> = segments.iter().map(|s| &s.origin).collect();
    let destinations: HashSet<&Airport> = segments.iter().map(|s| &s.destination).collect();

    let start = segments
        .iter()
        .map(|s| &s.origin)
        .find(|origin| !destinations.contains(origin))
        .ok_or(EndpointError::NoStart)?;
    let end = segments
        .iter()
        .map(|s| &s.destination)
        .find(|destination| !origins.contains(destination))
        .ok_or(EndpointError::NoEnd)?;

    Ok(EndpointPair {
        start: start.clone(),
        end: end.clone(),
    })
}

/// Degree-balance classification of a segment set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegreeProfile {
    /// No segments at all.
    Empty,

    /// One airport has one more departure than arrivals and one has one
    /// more arrival than departures; every other airport is balanced.
    /// An Eulerian trail, if connected, runs from `start` to `end`.
    Path { start: Airport, end: Airport },

    /// Every airport is balanced. Any origin can start a circuit; `start`
    /// is the smallest one.
    Circuit { start: Airport },

    /// No Eulerian trail exists. `imbalanced` counts the airports whose
    /// departures and arrivals differ.
    Unbalanced { imbalanced: usize },
}

/// Compute the degree profile of `segments` in O(n).
pub fn degree_profile(segments: &[Segment]) -> DegreeProfile {
    let Some(smallest_origin) = segments.iter().map(|s| &s.origin).min() else {
        return DegreeProfile::Empty;
    };

    // departures minus arrivals, per airport
    let mut balance: HashMap<&Airport, i64> = HashMap::new();
    for segment in segments {
        *balance.entry(&segment.origin).or_default() += 1;
        *balance.entry(&segment.destination).or_default() -= 1;
    }

    let mut start = None;
    let mut end = None;
    let mut imbalanced = 0;
    let mut path_shaped = true;

    for (&airport, &surplus) in &balance {
        match surplus {
            0 => continue,
            1 if start.is_none() => start = Some(airport),
            -1 if end.is_none() => end = Some(airport),
            _ => path_shaped = false,
        }
        imbalanced += 1;
    }

    if !path_shaped {
        return DegreeProfile::Unbalanced { imbalanced };
    }

    match (start, end) {
        (None, None) => DegreeProfile::Circuit {
            start: smallest_origin.clone(),
        },
        (Some(start), Some(end)) => DegreeProfile::Path {
            start: start.clone(),
            end: end.clone(),
        },
        _ => DegreeProfile::Unbalanced { imbalanced },
    }
}
