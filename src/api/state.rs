//! Shared application state.

use std::sync::Arc;

use crate::core::SpeciesService;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Species lookup and rewrite service.
    pub species: Arc<dyn SpeciesService>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(species: Arc<dyn SpeciesService>) -> Self {
        Self { species }
    }
}
