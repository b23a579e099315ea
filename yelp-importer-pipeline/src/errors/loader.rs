//! Error types for the entity loaders.
//! Defines the failures that abort a pass: an unreadable source file, an I/O
//! failure mid-read, a malformed JSON line, or a repository error that
//! survived the row-local fallback.
use std::path::PathBuf;

use thiserror::Error;
use yelp_importer_repository::ImportRepositoryError;

/// Represents errors that abort a single load pass.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to open source file `{path}`: {source}")]
    OpenSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read line {line}: {source}")]
    ReadLine { line: u64, source: std::io::Error },

    #[error("malformed JSON on line {line}: {source}")]
    MalformedLine {
        line: u64,
        source: serde_json::Error,
    },

    #[error("repository error: {0}")]
    Repository(#[from] ImportRepositoryError),
}
