//! Domain types for the itinerary server.
//!
//! This module contains the validated input model: airports and the flight
//! segments between them. All types enforce their invariants at construction
//! time, so the itinerary engine can trust their validity.

mod airport;
mod error;
mod itinerary;
mod segment;

pub use airport::{Airport, InvalidAirport};
pub use error::DomainError;
pub use itinerary::Itinerary;
pub use segment::{Segment, parse_segments};
