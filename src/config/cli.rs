use crate::config::toml_config::TomlConfig;
use crate::config::{
    ServiceConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SPECIES_API_URL,
    DEFAULT_TIMEOUT_SECONDS, DEFAULT_TRANSLATION_API_URL,
};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "pokedex-translator")]
#[command(about = "Species lookup service with fun-translated descriptions")]
pub struct CliConfig {
    #[arg(long, env = "POKEDEX_HOST")]
    pub host: Option<String>,

    #[arg(long, env = "POKEDEX_PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "SPECIES_API_URL")]
    pub species_api_url: Option<String>,

    #[arg(long, env = "TRANSLATION_API_URL")]
    pub translation_api_url: Option<String>,

    #[arg(
        long,
        env = "REQUEST_TIMEOUT_SECONDS",
        help = "Per-call timeout for both upstreams, overriding the config file"
    )]
    pub timeout_seconds: Option<u64>,

    /// Optional TOML file; flags and env vars take precedence over it
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file (if any) and resolves every setting.
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        Ok(self.merge(&file))
    }

    /// 優先順序: 命令列/環境變數 > 設定檔 > 預設值
    pub fn merge(&self, file: &TomlConfig) -> ServiceConfig {
        ServiceConfig {
            host: self
                .host
                .clone()
                .or_else(|| file.host().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.or(file.port()).unwrap_or(DEFAULT_PORT),
            species_api_url: self
                .species_api_url
                .clone()
                .or_else(|| file.species_api_url().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_SPECIES_API_URL.to_string()),
            translation_api_url: self
                .translation_api_url
                .clone()
                .or_else(|| file.translation_api_url().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_TRANSLATION_API_URL.to_string()),
            species_timeout_seconds: self
                .timeout_seconds
                .or(file.species_timeout_seconds())
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            translation_timeout_seconds: self
                .timeout_seconds
                .or(file.translation_timeout_seconds())
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}
