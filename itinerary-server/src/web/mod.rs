//! Web layer for the itinerary server.
//!
//! Provides HTTP endpoints for reconstructing itineraries and journey
//! endpoints from flight segments.

mod dto;
mod error;
mod routes;
mod state;

pub use dto::*;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
