//! Error types for the import repository.
//! Defines specific errors that can occur during database operations.
use thiserror::Error;

/// Represents errors that can occur within the import repository.
///
/// This enum consolidates error conditions specific to database interactions,
/// such as SQLx errors during batch inserts.
#[derive(Debug, Error)]
pub enum ImportRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}
