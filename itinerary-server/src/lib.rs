//! Flight itinerary server.
//!
//! A web service that answers: "given this unordered pile of boarding
//! passes, where did the traveler start, where did they end up, and which
//! way did they go?"

pub mod config;
pub mod domain;
pub mod itinerary;
pub mod logging;
pub mod web;
