//! Error types for the pipeline driver.
use thiserror::Error;
use yelp_importer_repository::ImportRepositoryError;

/// Represents errors that stop the pipeline before any pass runs.
///
/// Pass-level failures are not represented here: the driver logs them and
/// continues with the next pass.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("repository error: {0}")]
    Repository(#[from] ImportRepositoryError),

    #[error("target tables are missing; create the schema before running the import")]
    TablesMissing,
}
