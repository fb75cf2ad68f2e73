use anyhow::{Context, Result};
use deposit_relay::core::config::AppConfig;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    deposit_relay::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        anyhow::Error::from(e)
    })?;

    deposit_relay::api::serve(config)
        .await
        .context("Deposit relay server failed")
}
