//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failure while serializing state onto an output node.
///
/// Not classified further: a parent propagates the first child failure as-is.
#[derive(Error, Debug)]
pub enum SaveError {
    /// A site entry without an identifier cannot be written.
    #[error("Site entry has no identifier")]
    MissingSiteId,

    /// A site entry reported its own failure.
    #[error("Failed to save site '{site_id}': {reason}")]
    Site { site_id: String, reason: String },
}

/// Error types for rendering and writing a status snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The in-memory state could not be serialized.
    #[error("Snapshot serialization error: {0}")]
    Save(#[from] SaveError),

    /// JSON rendering failed.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Temporary file creation or write failed.
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The finished temporary file could not replace the destination.
    #[error("Failed to replace snapshot file: {0}")]
    Persist(#[from] tempfile::PersistError),
}
