//! Command-line front end for the function record store.
//!
//! Each subcommand is a thin adapter: it turns flags into a
//! [`FunctionRecordInput`], calls exactly one store or export operation, and
//! prints the outcome.

pub mod settings;

use std::{io::Write, path::PathBuf};

use anyhow::Context as _;
use clap::{Args, Subcommand};
use fnrecord_core::{COLUMNS, FunctionRecord, FunctionRecordInput, RecordId, RecordStore};
use fnrecord_export::Cell;

pub use settings::Settings;

// ─── Commands ─────────────────────────────────────────────────────────────────

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Create the store if needed and report how many records it holds.
  Init,
  /// Record a new function.
  Add {
    #[command(flatten)]
    form: FormArgs,
  },
  /// Overwrite every field of an existing function.
  Update {
    /// Id of the record to overwrite.
    id:   String,
    #[command(flatten)]
    form: FormArgs,
  },
  /// Print a single record.
  Show {
    id: String,
  },
  /// Print every record in insertion order.
  List {
    /// Emit a JSON array instead of tab-separated lines.
    #[arg(long)]
    json: bool,
  },
  /// Write all records to a spreadsheet (.xlsx, or .csv by extension).
  Export {
    /// Destination file; defaults to `export_path` from the settings.
    path: Option<PathBuf>,
  },
}

/// Form fields, all as text. [`FunctionRecordInput::validate`] coerces them
/// before the store is called.
#[derive(Args, Debug, Default, Clone)]
pub struct FormArgs {
  #[arg(long, default_value = "")]
  pub date:           String,
  #[arg(long, default_value = "")]
  pub name:           String,
  #[arg(long, default_value = "")]
  pub organiser:      String,
  #[arg(long, default_value = "")]
  pub resource:       String,
  #[arg(long, default_value = "")]
  pub time:           String,
  #[arg(long, default_value = "")]
  pub participants:   String,
  /// Path to the function photo; stored as given.
  #[arg(long, default_value = "")]
  pub photo:          String,
  #[arg(long, default_value = "")]
  pub welcome:        String,
  #[arg(long, default_value = "")]
  pub chief_guest:    String,
  #[arg(long, default_value = "")]
  pub vote_of_thanks: String,
}

impl From<FormArgs> for FunctionRecordInput {
  fn from(f: FormArgs) -> Self {
    FunctionRecordInput {
      function_date:       f.date,
      function_name:       f.name,
      organised_by:        f.organiser,
      resource_person:     f.resource,
      time:                f.time,
      total_participants:  f.participants,
      photo_path:          f.photo,
      welcome_address:     f.welcome,
      chief_guest_address: f.chief_guest,
      vote_of_thanks:      f.vote_of_thanks,
    }
  }
}

// ─── Dispatch ─────────────────────────────────────────────────────────────────

/// Run one command against `store`, writing user-facing output to `out`.
pub async fn run<S, W>(
  command: Command,
  store: &S,
  settings: &Settings,
  out: &mut W,
) -> anyhow::Result<()>
where
  S: RecordStore,
  W: Write,
{
  match command {
    Command::Init => {
      store.initialize().await?;
      let n = store.count().await?;
      writeln!(out, "store ready: {} ({n} records)", settings.store_path.display())?;
    }
    Command::Add { form } => {
      let record = FunctionRecordInput::from(form).validate()?;
      let id = store.create(record).await?;
      writeln!(out, "created record {id}")?;
    }
    Command::Update { id, form } => {
      let id: RecordId = id.parse()?;
      let record = FunctionRecordInput::from(form).validate()?;
      store
        .update(id, record)
        .await
        .with_context(|| format!("updating record {id}"))?;
      writeln!(out, "updated record {id}")?;
    }
    Command::Show { id } => {
      let id: RecordId = id.parse()?;
      let rec = store
        .get(id)
        .await?
        .ok_or(fnrecord_core::Error::NotFound(id))?;
      write_detail(out, &rec)?;
    }
    Command::List { json } => {
      let records = store.list().await?;
      if json {
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
      } else {
        write_rows(out, &records)?;
      }
    }
    Command::Export { path } => {
      let dest = path.unwrap_or_else(|| settings.export_path.clone());
      let written = fnrecord_export::export(store, &dest)
        .await
        .with_context(|| format!("exporting to {}", dest.display()))?;
      writeln!(out, "report written to {}", written.display())?;
    }
  }
  Ok(())
}

fn cells(rec: &FunctionRecord) -> Vec<String> {
  fnrecord_export::Table::from_records(std::slice::from_ref(rec))
    .rows
    .into_iter()
    .flatten()
    .map(|c: Cell| c.to_text())
    .collect()
}

fn write_rows<W: Write>(out: &mut W, records: &[FunctionRecord]) -> std::io::Result<()> {
  writeln!(out, "{}", COLUMNS.join("\t"))?;
  for rec in records {
    let line: Vec<String> = cells(rec)
      .into_iter()
      .map(|s| s.replace(['\t', '\n'], " "))
      .collect();
    writeln!(out, "{}", line.join("\t"))?;
  }
  Ok(())
}

fn write_detail<W: Write>(out: &mut W, rec: &FunctionRecord) -> std::io::Result<()> {
  for (name, value) in COLUMNS.iter().zip(cells(rec)) {
    writeln!(out, "{name:>19}: {value}")?;
  }
  Ok(())
}
