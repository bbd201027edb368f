//! Shared fixtures for itinerary tests.

use crate::domain::{Airport, Itinerary, Segment};

/// Nineteen shuffled legs of a single journey from BGY to AKL.
pub const REFERENCE_FLIGHTS: [(&str, &str); 19] = [
    ("BCN", "PSC"),
    ("JFK", "AAL"),
    ("FCO", "BCN"),
    ("GSO", "IND"),
    ("SFO", "ATL"),
    ("AAL", "HEL"),
    ("PSC", "BLQ"),
    ("IND", "EWR"),
    ("BGY", "RAR"),
    ("BJZ", "AKL"),
    ("AUH", "FCO"),
    ("HEL", "CAK"),
    ("RAR", "AUH"),
    ("CAK", "BJZ"),
    ("ATL", "GSO"),
    ("CHI", "JFK"),
    ("BLQ", "MAD"),
    ("EWR", "CHI"),
    ("MAD", "SFO"),
];

pub fn segments(pairs: &[(&str, &str)]) -> Vec<Segment> {
    pairs
        .iter()
        .map(|(origin, destination)| Segment::parse(origin, destination).unwrap())
        .collect()
}

pub fn codes(itinerary: &Itinerary) -> Vec<&str> {
    itinerary.airports().iter().map(Airport::as_str).collect()
}
