use anyhow::Result;
use everwin_park::{config::Config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("everwin_park=info".parse()?),
        )
        .init();

    info!("Starting Everwin Industrial Park site");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        "Default language: {}, scene enabled: {}",
        config.default_language.code(),
        config.scene_enabled
    );

    // Refuse to start with a broken dictionary
    server::check_dictionaries()?;

    server::serve(config).await
}
