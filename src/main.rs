//! portal-sweep binary entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portal_sweep::portal::PortalClient;
use portal_sweep::services::orchestrator;
use portal_sweep::{Result, SweepConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal_sweep=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = SweepConfig::from_env()?;
    tracing::info!(
        portal = %config.portal.base_url,
        category = %config.category,
        holding_account = %config.holding_account,
        delete_accounts = config.delete_accounts,
        "Starting sweep"
    );

    if !config.delete_accounts {
        tracing::info!("Account deletion disabled; content will be transferred only");
    }

    let client = PortalClient::new(&config.portal, config.page_size)?;

    let summary = orchestrator::run(&client, &config).await?;
    tracing::info!("Sweep complete: {}", summary);

    Ok(())
}
