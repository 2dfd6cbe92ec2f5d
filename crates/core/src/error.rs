//! Error types shared across ChurnGuard crates

use thiserror::Error;

/// Core errors
#[derive(Error, Debug)]
pub enum Error {
    /// Failure raised by the customer store collaborator
    #[error("store error: {0}")]
    Store(String),

    /// A record did not pass ingest validation
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Result alias used throughout the workspace
pub type Result<T> = std::result::Result<T, Error>;
