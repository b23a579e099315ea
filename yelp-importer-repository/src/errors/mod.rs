//! Error types for the importer repository.
//! Consolidates and re-exports error types related to repository operations.
mod import;

pub use import::ImportRepositoryError;
