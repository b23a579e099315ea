//! Yelp Importer
//!
//! This library provides the entry-point wiring for the Yelp dataset
//! importer: configuration read from the environment, error handling, and
//! dependency construction.

pub mod config;
pub mod errors;

pub use config::{Config, Dependencies};
pub use errors::ImporterError;
