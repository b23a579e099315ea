//! Error types for the importer application.
//! Consolidates errors from configuration, database setup, and the pipeline
//! driver.
use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ImporterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Repository error: {0}")]
    Repository(#[from] yelp_importer_repository::ImportRepositoryError),
    #[error("Driver error: {0}")]
    Driver(#[from] yelp_importer_pipeline::errors::DriverError),
}
