#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_SPECIES_API_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_TRANSLATION_API_URL: &str = "https://api.funtranslations.com";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Fully resolved settings the server is wired from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub species_api_url: String,
    pub translation_api_url: String,
    pub species_timeout_seconds: u64,
    pub translation_timeout_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            species_api_url: DEFAULT_SPECIES_API_URL.to_string(),
            translation_api_url: DEFAULT_TRANSLATION_API_URL.to_string(),
            species_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            translation_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ConfigProvider for ServiceConfig {
    fn species_api_url(&self) -> &str {
        &self.species_api_url
    }

    fn translation_api_url(&self) -> &str {
        &self.translation_api_url
    }

    fn species_timeout(&self) -> Duration {
        Duration::from_secs(self.species_timeout_seconds)
    }

    fn translation_timeout(&self) -> Duration {
        Duration::from_secs(self.translation_timeout_seconds)
    }

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        validate_url("species_api_url", &self.species_api_url)?;
        validate_url("translation_api_url", &self.translation_api_url)?;
        validate_range("species_timeout_seconds", self.species_timeout_seconds, 1, 300)?;
        validate_range(
            "translation_timeout_seconds",
            self.translation_timeout_seconds,
            1,
            300,
        )?;

        tracing::debug!("✅ Service configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServiceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.species_timeout(), Duration::from_secs(10));
        assert_eq!(config.translation_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_rejects_bad_upstream_url() {
        let config = ServiceConfig {
            translation_api_url: "not a url".to_string(),
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_timeout_and_port() {
        let config = ServiceConfig {
            translation_timeout_seconds: 0,
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ServiceConfig {
            port: 0,
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
