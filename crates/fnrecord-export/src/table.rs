//! Tabular view of a record set: one header row plus one row per record.

use fnrecord_core::{COLUMNS, FunctionRecord};

/// A single spreadsheet cell, typed after the stored column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
  Text(String),
  Int(i64),
  Empty,
}

impl Cell {
  /// Plain-text rendering used by text formats such as CSV.
  pub fn to_text(&self) -> String {
    match self {
      Cell::Text(s) => s.clone(),
      Cell::Int(n) => n.to_string(),
      Cell::Empty => String::new(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
  pub header: [&'static str; 11],
  pub rows:   Vec<[Cell; 11]>,
}

impl Table {
  pub fn from_records(records: &[FunctionRecord]) -> Self {
    let rows = records.iter().map(row).collect();
    Table { header: COLUMNS, rows }
  }

  /// Row count including the header row.
  pub fn height(&self) -> usize { self.rows.len() + 1 }
}

fn row(rec: &FunctionRecord) -> [Cell; 11] {
  let f = &rec.fields;
  [
    Cell::Int(rec.id.get()),
    Cell::Text(f.function_date.clone()),
    Cell::Text(f.function_name.clone()),
    Cell::Text(f.organised_by.clone()),
    Cell::Text(f.resource_person.clone()),
    Cell::Text(f.time.clone()),
    f.total_participants.map_or(Cell::Empty, Cell::Int),
    Cell::Text(f.photo_path.clone()),
    Cell::Text(f.welcome_address.clone()),
    Cell::Text(f.chief_guest_address.clone()),
    Cell::Text(f.vote_of_thanks.clone()),
  ]
}
