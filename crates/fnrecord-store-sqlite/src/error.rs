//! Error type for `fnrecord-store-sqlite`.

use fnrecord_core::RecordId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// Attempted to update a record that does not exist.
  #[error("function record not found: {0}")]
  NotFound(RecordId),

  /// A stored row could not be decoded into a record.
  #[error("corrupt row: {0}")]
  Corrupt(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
