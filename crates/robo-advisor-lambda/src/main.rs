//! robo-advisor function host
//!
//! Runs the `RecommendPortfolio` dialog handler inside the function runtime.
//! The runtime owns transport; this binary only sets up logging and wires
//! the handler in.

mod config;
mod handler;

use lambda_runtime::service_fn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use robo_advisor::{PortfolioAdvisor, ValidationPolicy};

use crate::config::RuntimeConfig;
use crate::handler::function_handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();
    let config = RuntimeConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(config.log_ansi)
                .with_target(false)
                .without_time(),
        )
        .init();

    let policy = ValidationPolicy::default();
    tracing::info!(
        min_age = policy.min_age,
        max_age_exclusive = policy.max_age_exclusive,
        min_investment = %policy.min_investment,
        "robo-advisor handler starting"
    );

    let advisor = PortfolioAdvisor::new(policy);
    let advisor = &advisor;

    lambda_runtime::run(service_fn(move |event| async move {
        function_handler(advisor, event).await
    }))
    .await
    .map_err(|err| anyhow::anyhow!(err))?;

    Ok(())
}
