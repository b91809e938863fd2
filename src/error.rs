//! Error types for store and service operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the store and service layers.
///
/// Not-found is not part of this taxonomy: single-record fetches signal it
/// with `Ok(None)`, and updates/deletes of missing ids succeed silently.
#[derive(Debug, Error)]
pub enum Error {
    /// The database file could not be opened or configured.
    #[error("failed to open database at {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Schema creation failed.
    #[error("failed to create schema")]
    Schema(#[source] rusqlite::Error),

    /// A statement failed to prepare or execute.
    #[error("database query failed")]
    Query(#[from] rusqlite::Error),

    /// The user's home directory could not be determined.
    #[error("could not determine home directory")]
    Home,
}

/// Result type for store and service operations.
pub type Result<T> = std::result::Result<T, Error>;
