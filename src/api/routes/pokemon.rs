//! Species routes.

use axum::extract::{Path, State};
use axum::{Router, routing::get};
use tracing::{info, instrument};

use crate::api::response::OutcomeResponse;
use crate::api::state::AppState;

/// GET /{name}
#[instrument(skip(state))]
async fn get_species(State(state): State<AppState>, Path(name): Path<String>) -> OutcomeResponse {
    let outcome = state.species.fetch(&name).await;
    info!(status = outcome.status_code(), "species lookup finished");
    outcome.into()
}

/// GET /translated/{name}
#[instrument(skip(state))]
async fn get_translated_species(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> OutcomeResponse {
    let outcome = state.species.fetch_with_rewrite(&name).await;
    info!(status = outcome.status_code(), "translated species lookup finished");
    outcome.into()
}

/// Returns the router for species lookups.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/translated/{name}", get(get_translated_species))
        .route("/{name}", get(get_species))
}
