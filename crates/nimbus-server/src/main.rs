//! # Nimbus Weather Server
//!
//! Main entry point for the Nimbus read-through weather caching proxy.

use nimbus_config::ConfigLoader;
use nimbus_core::NimbusResult;
use tracing::{error, info};

mod startup;

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Nimbus Weather Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> NimbusResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    startup::run(config).await
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nimbus=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
