//! Snapshot persistence errors.

use thiserror::Error;

/// Errors from reading or writing a cart snapshot.
///
/// These never reach cart mutation callers: a failed load falls back to an
/// empty cart and a failed save is logged while the in-memory state stays
/// applied. Store implementations and the CLI still see them as `Result`s.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Underlying storage read or write failed.
    #[error("snapshot storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored bytes are not a valid snapshot (corrupt or incompatible shape).
    #[error("snapshot decode error: {0}")]
    Json(#[from] serde_json::Error),
}
