//! Inbound HTTP surface.

pub mod response;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::adapters::{SpeciesApiClient, TranslationApiClient};
use crate::api::state::AppState;
use crate::core::engine::PokedexEngine;
use crate::core::ConfigProvider;
use crate::utils::error::Result;

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/pokemon", routes::pokemon::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wires the real upstream clients behind the engine.
pub fn state_from_config<C: ConfigProvider>(config: &C) -> Result<AppState> {
    let lookup = SpeciesApiClient::new(config.species_api_url(), config.species_timeout())?;
    let rewriter =
        TranslationApiClient::new(config.translation_api_url(), config.translation_timeout())?;

    Ok(AppState::new(Arc::new(PokedexEngine::new(lookup, rewriter))))
}
