use dotenv::dotenv;
use yelp_importer::{Config, Dependencies, ImporterError};

/// Main entry point for the Yelp dataset importer.
///
/// Initializes dotenv and tracing, reads the configuration, wires the
/// dependencies, and runs the fixed eight-pass pipeline. Pass-level failures
/// are logged by the driver and do not affect the exit status; only startup
/// failures are fatal.
#[tokio::main]
async fn main() -> Result<(), ImporterError> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    tracing::info!(batch_size = config.batch_size, "starting import");
    let dependencies = Dependencies::new(&config).await?;
    dependencies.driver.run().await?;
    Ok(())
}
