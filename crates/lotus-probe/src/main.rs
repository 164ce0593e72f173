//! Lotus Probe - connectivity check for a Lotus deployment
//!
//! Reads `LOTUS_HOST` / `LOTUS_API_KEY` (or `.secrets/lotus.json`), pings the
//! API, and logs a short summary of the organization's plans and customers.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lotus_client::{ClientConfig, ListPlansRequest, LotusClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lotus_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;

    tracing::info!(
        base_url = %config.base_url(),
        timeout_ms = %config.timeout.as_millis(),
        retry_count = %config.retry_count,
        debug = %config.debug,
        "Client configuration loaded"
    );

    let client = LotusClient::with_config(config)?;

    let org = client.ping().await?;
    tracing::info!(organization_id = %org.organization_id, "Connected");

    let plans = client.list_plans(&ListPlansRequest::default()).await?;
    for plan in &plans {
        tracing::debug!(
            plan_id = %plan.plan_id,
            plan_name = %plan.plan_name,
            active_version = plan.active_version,
            "Plan"
        );
    }

    let customers = client.list_customers().await?;

    tracing::info!(
        plans = plans.len(),
        customers = customers.len(),
        "Probe complete"
    );

    Ok(())
}
