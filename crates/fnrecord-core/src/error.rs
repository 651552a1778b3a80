//! Error types for `fnrecord-core`.

use thiserror::Error;

use crate::record::RecordId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// A form value could not be coerced to the type its column requires.
  #[error("invalid value for {field}: {value:?}")]
  Validation { field: &'static str, value: String },

  #[error("function record not found: {0}")]
  NotFound(RecordId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
