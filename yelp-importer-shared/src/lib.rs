//! # Yelp Importer Shared
//! This crate defines shared data structures and types used across the importer.
//! It includes the source record types deserialized from the JSON dumps, the
//! normalized row types written to the relational schema, and the pure
//! normalization helpers (string sanitizing, attribute flattening).
pub mod attributes;
pub mod sanitize;
pub mod types;
