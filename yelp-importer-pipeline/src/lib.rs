//! # Yelp Importer Pipeline
//! This crate defines the load pipeline for the Yelp dataset importer.
//! It includes the newline-delimited JSON source reader, the eight entity
//! loaders, and the driver that runs them in foreign-key order, along with
//! error handling.
pub mod driver;
pub mod loader;
pub mod source;

pub mod errors;
