use anyhow::Context;
use clap::Parser;
use pokedex_translator::api;
use pokedex_translator::core::ConfigProvider;
use pokedex_translator::utils::{logger, validation::Validate};
use pokedex_translator::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    let format = if cli.json_logs {
        logger::LogFormat::Json
    } else {
        logger::LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose);

    tracing::info!("🚀 Starting pokedex-translator");

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    tracing::debug!("Resolved config: {:?}", config);
    tracing::info!("Species API: {}", config.species_api_url());
    tracing::info!("Translation API: {}", config.translation_api_url());

    let state = api::state_from_config(&config).context("failed to build upstream clients")?;
    let app = api::app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;
    tracing::info!("📡 Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
