//! Application state for the web layer.

use std::sync::Arc;

use crate::itinerary::ItineraryService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Itinerary reconstruction service
    pub service: Arc<ItineraryService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(service: ItineraryService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
