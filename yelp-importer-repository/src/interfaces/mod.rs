//! This module defines and re-exports the interfaces for the import repository.
//! It serves as a central point for accessing traits related to data interaction.
mod import;

pub use import::ImportRepository;
