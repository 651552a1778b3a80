//! Spreadsheet export for the function record store.
//!
//! Reads every record through any [`RecordStore`], renders a [`Table`] and
//! writes it with a [`SheetWriter`]. The file is assembled under a temporary
//! name next to the destination and renamed into place once complete, so an
//! existing report is either replaced whole or left untouched.

pub mod error;
pub mod table;
pub mod writer;

use std::{
  fs,
  path::{Path, PathBuf},
};

use fnrecord_core::RecordStore;
use tracing::info;

pub use error::{Error, Result};
pub use table::{Cell, Table};
pub use writer::{CsvWriter, Format, SheetWriter, XlsxWriter};

/// Export every record in `store` to `destination`, overwriting any file
/// already there. The format follows the destination's extension (see
/// [`Format::from_path`]). Returns the path written.
pub async fn export<S>(store: &S, destination: impl AsRef<Path>) -> Result<PathBuf>
where
  S: RecordStore,
{
  let destination = destination.as_ref().to_path_buf();
  let writer = Format::from_path(&destination).writer();
  export_with(store, destination, writer).await
}

/// Like [`export`] but with an explicit writer.
pub async fn export_with<S>(
  store: &S,
  destination: PathBuf,
  writer: Box<dyn SheetWriter>,
) -> Result<PathBuf>
where
  S: RecordStore,
{
  let records = store
    .list()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  let table = Table::from_records(&records);
  let rows = table.rows.len();

  let written = tokio::task::spawn_blocking(move || {
    write_atomic(writer.as_ref(), &table, &destination)?;
    Ok::<_, Error>(destination)
  })
  .await??;

  info!(path = %written.display(), rows, "exported function records");
  Ok(written)
}

/// Write `table` to a temporary file in the destination's directory, then
/// rename it over `destination`.
///
/// The finished file keeps the permissions of the file it replaces. A new
/// file gets the same mode a plain create would give it (0o666 less the
/// umask on Unix).
pub fn write_atomic(
  writer: &dyn SheetWriter,
  table: &Table,
  destination: &Path,
) -> Result<()> {
  let dir = match destination.parent() {
    Some(p) if !p.as_os_str().is_empty() => p,
    _ => Path::new("."),
  };

  let existing = fs::metadata(destination).ok().map(|m| m.permissions());

  let mut builder = tempfile::Builder::new();
  if let Some(perms) = existing.is_none().then(fresh_file_permissions).flatten() {
    builder.permissions(perms);
  }
  let tmp = builder.tempfile_in(dir)?;

  writer.write(table, tmp.path())?;
  // Applied after the write so a read-only predecessor does not block it.
  if let Some(perms) = existing {
    fs::set_permissions(tmp.path(), perms)?;
  }
  tmp.persist(destination)?;
  Ok(())
}

/// Mode for a report with no predecessor. It passes through open(2), which
/// applies the umask.
#[cfg(unix)]
fn fresh_file_permissions() -> Option<fs::Permissions> {
  use std::os::unix::fs::PermissionsExt as _;
  Some(fs::Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn fresh_file_permissions() -> Option<fs::Permissions> { None }

#[cfg(test)]
mod tests;
