use crate::adapters::dto::PokemonSpeciesDto;
use crate::domain::model::Outcome;
use crate::domain::ports::SpeciesLookup;
use crate::utils::error::{Result, TranslatorError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// PokeAPI species client.
#[derive(Debug, Clone)]
pub struct SpeciesApiClient {
    client: Client,
    base_url: Url,
}

impl SpeciesApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let invalid = |reason: String| TranslatorError::InvalidConfigValueError {
            field: "species_api_url".to_string(),
            value: base_url.to_string(),
            reason,
        };

        let base_url = Url::parse(base_url).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry path segments".to_string()));
        }

        Ok(Self { client, base_url })
    }

    /// `{base}/pokemon-species/{identifier}` with the identifier kept as one encoded segment.
    fn species_endpoint(&self, identifier: &str) -> Option<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push("pokemon-species")
            .push(identifier);
        Some(url)
    }
}

/// `.` and `..` would be dropped or resolved as path navigation, never a species name.
fn is_dot_segment(identifier: &str) -> bool {
    matches!(identifier, "." | "..")
}

#[async_trait]
impl SpeciesLookup for SpeciesApiClient {
    async fn fetch(&self, identifier: &str) -> Outcome {
        if identifier.trim().is_empty() || is_dot_segment(identifier) {
            tracing::debug!("Rejecting species identifier '{}'", identifier);
            return Outcome::InvalidInput;
        }

        let Some(endpoint) = self.species_endpoint(identifier) else {
            tracing::warn!("⚠️ Could not build species URL for '{}'", identifier);
            return Outcome::UpstreamError(StatusCode::BAD_GATEWAY.as_u16());
        };
        tracing::debug!("Making species request to: {}", endpoint);

        let response = match self.client.get(endpoint).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("⚠️ Species upstream unreachable for '{}': {}", identifier, e);
                return Outcome::UpstreamError(StatusCode::BAD_GATEWAY.as_u16());
            }
        };

        let status = response.status();
        tracing::debug!("Species response status: {}", status);

        // 非 2xx 原樣回傳狀態碼
        if !status.is_success() {
            return Outcome::UpstreamError(status.as_u16());
        }

        match response.json::<Option<PokemonSpeciesDto>>().await {
            Ok(Some(dto)) => Outcome::Ok(dto.into_record()),
            Ok(None) => {
                tracing::warn!("Species upstream returned an empty document for '{}'", identifier);
                Outcome::NotFound
            }
            Err(e) => {
                tracing::warn!("⚠️ Could not parse species body for '{}': {}", identifier, e);
                Outcome::UpstreamError(StatusCode::BAD_GATEWAY.as_u16())
            }
        }
    }
}
