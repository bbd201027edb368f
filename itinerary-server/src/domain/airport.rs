//! Airport identifier type.

use std::fmt;

/// Error returned when parsing an invalid airport identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport: {reason}")]
pub struct InvalidAirport {
    reason: &'static str,
}

/// An airport identifier, such as an IATA code.
///
/// Identifiers are opaque: the only validation is that they must be
/// non-empty. Ordering is lexicographic on the underlying string, which is
/// the tie-break order used when assembling itineraries.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::Airport;
///
/// let muc = Airport::parse("MUC").unwrap();
/// assert_eq!(muc.as_str(), "MUC");
///
/// // Empty strings are rejected
/// assert!(Airport::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Airport(String);

impl Airport {
    /// Parse an airport identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidAirport> {
        if s.is_empty() {
            return Err(InvalidAirport {
                reason: "identifier cannot be empty",
            });
        }
        Ok(Airport(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the Airport and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airport({})", self.0)
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
