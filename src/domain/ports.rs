use crate::domain::model::{Outcome, RewriteResult, RewriteStyle};
use async_trait::async_trait;

/// Fetches a species record from the species-data upstream.
#[async_trait]
pub trait SpeciesLookup: Send + Sync {
    async fn fetch(&self, identifier: &str) -> Outcome;
}

/// Rewrites text in a fun style. `None` means the rewrite is unavailable.
#[async_trait]
pub trait DescriptionRewriter: Send + Sync {
    async fn rewrite(&self, text: &str, style: RewriteStyle) -> Option<RewriteResult>;
}

/// What the inbound HTTP layer talks to.
#[async_trait]
pub trait SpeciesService: Send + Sync {
    async fn fetch(&self, identifier: &str) -> Outcome;
    async fn fetch_with_rewrite(&self, identifier: &str) -> Outcome;
}

pub trait ConfigProvider: Send + Sync {
    fn species_api_url(&self) -> &str;
    fn translation_api_url(&self) -> &str;
    fn species_timeout(&self) -> std::time::Duration;
    fn translation_timeout(&self) -> std::time::Duration;
    fn bind_address(&self) -> String;
}
