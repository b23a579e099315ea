//! Configuration module for the importer.
//! Defines the environment-backed settings and the application dependencies.
mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{Config, ConfigError};
