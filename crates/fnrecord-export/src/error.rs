//! Error type for `fnrecord-export`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The destination could not be written (missing directory, permissions).
  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),

  #[error("xlsx error: {0}")]
  Xlsx(#[from] rust_xlsxwriter::XlsxError),

  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  /// The finished temporary file could not be moved onto the destination.
  #[error("could not replace destination: {0}")]
  Persist(#[from] tempfile::PersistError),

  #[error("export task failed: {0}")]
  Join(#[from] tokio::task::JoinError),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
