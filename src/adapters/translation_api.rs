use crate::adapters::dto::FunTranslationResponseDto;
use crate::domain::model::{RewriteResult, RewriteStyle};
use crate::domain::ports::DescriptionRewriter;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fun-translations client. Every failure collapses to `None`.
#[derive(Debug, Clone)]
pub struct TranslationApiClient {
    client: Client,
    base_url: String,
}

impl TranslationApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn translate_endpoint(&self, style: RewriteStyle) -> String {
        format!("{}/translate/{}.json", self.base_url, style.path_segment())
    }
}

#[async_trait]
impl DescriptionRewriter for TranslationApiClient {
    async fn rewrite(&self, text: &str, style: RewriteStyle) -> Option<RewriteResult> {
        if text.trim().is_empty() {
            return None;
        }

        let endpoint = self.translate_endpoint(style);
        tracing::debug!("Making {} translation request to: {}", style, endpoint);

        // form() 會設定 application/x-www-form-urlencoded 並做編碼
        let response = match self.client.post(&endpoint).form(&[("text", text)]).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("⚠️ Translation upstream unreachable: {}", e);
                return None;
            }
        };

        let status = response.status();
        tracing::debug!("Translation response status: {}", status);

        if !status.is_success() {
            tracing::warn!("⚠️ Translation upstream answered {}, keeping original text", status);
            return None;
        }

        match response.json::<FunTranslationResponseDto>().await {
            Ok(dto) => Some(dto.into_result()),
            Err(e) => {
                tracing::warn!("⚠️ Could not parse translation body: {}", e);
                None
            }
        }
    }
}
