//! PostgreSQL implementations of the repository interfaces.
mod import_repository;

pub use import_repository::PostgresImportRepository;
