//! Maps lookup outcomes onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::core::Outcome;

/// HTTP-layer wrapper around `Outcome` that implements `IntoResponse`.
#[derive(Debug)]
pub struct OutcomeResponse(pub Outcome);

impl From<Outcome> for OutcomeResponse {
    fn from(outcome: Outcome) -> Self {
        Self(outcome)
    }
}

impl IntoResponse for OutcomeResponse {
    fn into_response(self) -> Response {
        let code = self.0.status_code();
        match self.0 {
            Outcome::Ok(record) => (StatusCode::OK, Json(record)).into_response(),
            // Failures carry the status only, never a partial payload.
            _ => StatusCode::from_u16(code)
                .unwrap_or(StatusCode::BAD_GATEWAY)
                .into_response(),
        }
    }
}
