//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use tracing::{debug, info};

use fnrecord_core::{FunctionRecord, NewFunctionRecord, RecordId, RecordStore};

use crate::{Error, Result, encode::RawRecord, schema::SCHEMA};

/// Every column of `functions`, in [`fnrecord_core::COLUMNS`] order.
pub const SELECT_ALL: &str = "SELECT
   id, function_date, function_name, organised_by, resource_person, time,
   total_participants, photo_path, welcome_address, chief_guest_address,
   vote_of_thanks
 FROM functions";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A function record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    debug!(path = %path.as_ref().display(), "opening function store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  async fn initialize(&self) -> Result<()> { self.init_schema().await }

  async fn create(&self, record: NewFunctionRecord) -> Result<RecordId> {
    // Insert and rowid lookup share one call, so no other write can land
    // between them on the connection thread.
    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO functions (
             function_date, function_name, organised_by, resource_person,
             time, total_participants, photo_path, welcome_address,
             chief_guest_address, vote_of_thanks
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          rusqlite::params![
            record.function_date,
            record.function_name,
            record.organised_by,
            record.resource_person,
            record.time,
            record.total_participants,
            record.photo_path,
            record.welcome_address,
            record.chief_guest_address,
            record.vote_of_thanks,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    info!(id, "function record created");
    Ok(RecordId(id))
  }

  async fn update(&self, id: RecordId, record: NewFunctionRecord) -> Result<()> {
    let raw_id = id.get();

    let changed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE functions SET
             function_date = ?1, function_name = ?2, organised_by = ?3,
             resource_person = ?4, time = ?5, total_participants = ?6,
             photo_path = ?7, welcome_address = ?8,
             chief_guest_address = ?9, vote_of_thanks = ?10
           WHERE id = ?11",
          rusqlite::params![
            record.function_date,
            record.function_name,
            record.organised_by,
            record.resource_person,
            record.time,
            record.total_participants,
            record.photo_path,
            record.welcome_address,
            record.chief_guest_address,
            record.vote_of_thanks,
            raw_id,
          ],
        )?)
      })
      .await?;

    if changed == 0 {
      debug!(%id, "update matched no record");
      return Err(Error::NotFound(id));
    }

    info!(%id, "function record updated");
    Ok(())
  }

  async fn get(&self, id: RecordId) -> Result<Option<FunctionRecord>> {
    let raw_id = id.get();

    let raw: Option<RawRecord> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("{SELECT_ALL} WHERE id = ?1"),
            rusqlite::params![raw_id],
            RawRecord::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawRecord::into_record).transpose()
  }

  async fn list(&self) -> Result<Vec<FunctionRecord>> {
    let raws: Vec<RawRecord> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!("{SELECT_ALL} ORDER BY id"))?;
        let rows = stmt
          .query_map([], RawRecord::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    debug!(count = raws.len(), "listed function records");
    raws.into_iter().map(RawRecord::into_record).collect()
  }

  async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM functions", [], |r| r.get(0))?)
      })
      .await?;
    Ok(n as u64)
  }
}
