pub mod api;
pub mod config;
pub mod container;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod telemetry;

use config::AppConfig;
use container::Container;
use infrastructure::databases::surrealdb;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Database(#[from] ::surrealdb::Error),
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Telemetry(#[from] telemetry::TelemetryError),
}

/// Loads the configuration, installs the log subscriber and wires the
/// signup controller against a live SurrealDB connection.
///
/// Serving the controller is left to the caller's transport.
pub async fn bootstrap() -> Result<Container, StartupError> {
    let config = AppConfig::load()?;

    telemetry::configure(&config.service, &config.logging)?;

    let conn = surrealdb::connect(&config.surrealdb).await?;

    tracing::info!(
        host = %config.surrealdb.host,
        port = config.surrealdb.port,
        "connected to surrealdb"
    );

    Ok(Container::new(conn))
}
