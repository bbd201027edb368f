//! Flight segments.

use std::fmt;

use super::error::DomainError;
use super::{Airport, InvalidAirport};

/// One directed flight leg from `origin` to `destination`.
///
/// Field order matters: the derived `Ord` compares by origin first, then
/// destination, which is the sort order the graph builder relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment {
    pub origin: Airport,
    pub destination: Airport,
}

impl Segment {
    /// Create a segment from two validated airports.
    pub fn new(origin: Airport, destination: Airport) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Parse a segment from two raw identifiers.
    pub fn parse(origin: &str, destination: &str) -> Result<Self, InvalidAirport> {
        Ok(Self::new(Airport::parse(origin)?, Airport::parse(destination)?))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.origin, self.destination)
    }
}

/// Validate raw `[origin, destination]` pairs into segments.
///
/// The list must be non-empty and each entry must carry at least two
/// non-empty identifiers. Elements beyond the second are ignored.
pub fn parse_segments<S: AsRef<str>>(raw: &[Vec<S>]) -> Result<Vec<Segment>, DomainError> {
    if raw.is_empty() {
        return Err(DomainError::EmptySegments);
    }

    raw.iter()
        .enumerate()
        .map(|(index, pair)| {
            let [origin, destination, ..] = pair.as_slice() else {
                return Err(DomainError::MalformedSegment {
                    index,
                    reason: format!(
                        "expected [origin, destination], got {} element(s)",
                        pair.len()
                    ),
                });
            };
            Segment::parse(origin.as_ref(), destination.as_ref()).map_err(|e| {
                DomainError::MalformedSegment {
                    index,
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}
