use std::sync::Arc;

use aws_inventory::utils::{logger, validation::Validate};
use aws_inventory::{ApiServer, AppState, AwsCloud, CliConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose);

    tracing::info!("Starting aws-inventory server");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    if let Some(profile) = &settings.profile {
        tracing::info!("Using shared config profile '{}'", profile);
    }

    // Credentials and region are resolved once; all handlers share the clients
    let cloud = Arc::new(AwsCloud::from_settings(&settings).await);
    let state = Arc::new(AppState::new(
        cloud.clone(),
        cloud,
        settings.quota_services.clone(),
        settings.max_clusters,
    ));

    let server = ApiServer::new(settings.bind_addr(), state);
    server.run().await?;

    Ok(())
}
