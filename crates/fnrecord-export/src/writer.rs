//! Spreadsheet writers.
//!
//! [`SheetWriter`] is the only surface the exporter needs from a spreadsheet
//! library. Writers are synchronous and write a complete file at `path`.

use std::path::Path;

use rust_xlsxwriter::{Format as CellFormat, Workbook};
use tracing::warn;

use crate::{
  Result,
  table::{Cell, Table},
};

pub trait SheetWriter: Send + Sync {
  fn write(&self, table: &Table, path: &Path) -> Result<()>;
}

// ─── Format selection ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  Xlsx,
  Csv,
}

impl Format {
  /// Pick a format from the destination's extension. Anything that is not
  /// `.csv` is written as a workbook.
  pub fn from_path(path: &Path) -> Self {
    match path.extension().and_then(|e| e.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("csv") => Format::Csv,
      _ => Format::Xlsx,
    }
  }

  pub fn writer(self) -> Box<dyn SheetWriter> {
    match self {
      Format::Xlsx => Box::new(XlsxWriter::default()),
      Format::Csv => Box::new(CsvWriter),
    }
  }
}

// ─── xlsx ────────────────────────────────────────────────────────────────────

/// Longest string Excel accepts in a single cell, in characters.
pub const MAX_XLSX_CELL_CHARS: usize = 32_767;

/// Cut `s` to at most [`MAX_XLSX_CELL_CHARS`] characters on a char boundary.
/// Returns `None` when `s` already fits.
fn clip_for_xlsx(s: &str) -> Option<&str> {
  s.char_indices()
    .nth(MAX_XLSX_CELL_CHARS)
    .map(|(byte, _)| &s[..byte])
}

/// Writes a one-sheet workbook with a bold header row.
pub struct XlsxWriter {
  pub sheet_name: String,
}

impl Default for XlsxWriter {
  fn default() -> Self {
    Self { sheet_name: "functions".to_owned() }
  }
}

impl SheetWriter for XlsxWriter {
  fn write(&self, table: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let bold = CellFormat::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(&self.sheet_name)?;

    for (col, name) in table.header.iter().enumerate() {
      sheet.write_string_with_format(0, col as u16, *name, &bold)?;
    }

    for (r, cells) in table.rows.iter().enumerate() {
      let row = r as u32 + 1;
      for (col, cell) in cells.iter().enumerate() {
        let col = col as u16;
        match cell {
          Cell::Text(s) => {
            let text = match clip_for_xlsx(s) {
              Some(clipped) => {
                warn!(
                  id = %cells[0].to_text(),
                  column = table.header[col as usize],
                  chars = s.chars().count(),
                  "cell exceeds the xlsx limit; truncated in the report"
                );
                clipped
              }
              None => s.as_str(),
            };
            sheet.write_string(row, col, text)?;
          }
          Cell::Int(n) => {
            sheet.write_number(row, col, *n as f64)?;
          }
          Cell::Empty => {}
        }
      }
    }

    workbook.save(path)?;
    Ok(())
  }
}

// ─── csv ─────────────────────────────────────────────────────────────────────

/// Writes RFC 4180 CSV: header line, then one line per record.
pub struct CsvWriter;

impl SheetWriter for CsvWriter {
  fn write(&self, table: &Table, path: &Path) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(table.header)?;
    for cells in &table.rows {
      w.write_record(cells.iter().map(Cell::to_text))?;
    }
    w.flush()?;
    Ok(())
  }
}
