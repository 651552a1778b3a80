//! The `RecordStore` trait.
//!
//! Implemented by storage backends (e.g. `fnrecord-store-sqlite`). The
//! exporter and the CLI depend on this abstraction, not on a concrete backend.

use std::future::Future;

use crate::record::{FunctionRecord, NewFunctionRecord, RecordId};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a function record store backend.
///
/// Records are never deleted. Each write is a single atomic statement, and
/// backends serialise writes so that ids are never handed out twice.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded tokio runtimes.
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Ensure the backing schema exists. Idempotent.
  fn initialize(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Persist a new record and return its freshly assigned id.
  ///
  /// The write is committed before the future resolves.
  fn create(
    &self,
    record: NewFunctionRecord,
  ) -> impl Future<Output = Result<RecordId, Self::Error>> + Send + '_;

  /// Overwrite every data field of the record with `id`.
  ///
  /// Fails with a not-found error, leaving the store unchanged, when no such
  /// record exists.
  fn update(
    &self,
    id: RecordId,
    record: NewFunctionRecord,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get(
    &self,
    id: RecordId,
  ) -> impl Future<Output = Result<Option<FunctionRecord>, Self::Error>> + Send + '_;

  /// Snapshot of every stored record in insertion order.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<FunctionRecord>, Self::Error>> + Send + '_;

  /// Number of stored records.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
