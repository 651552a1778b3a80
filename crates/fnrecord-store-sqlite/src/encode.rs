//! Decoding helpers between SQLite rows and [`FunctionRecord`].
//!
//! Text columns map one-to-one onto `String` fields. `total_participants` is
//! read as a dynamic [`Value`] so that a database written by another tool
//! (which may have stored the raw form text) yields a descriptive
//! [`Error::Corrupt`] rather than an opaque column-type error.

use fnrecord_core::{FunctionRecord, NewFunctionRecord, RecordId};
use rusqlite::{Row, types::Value};

use crate::{Error, Result};

// ─── Participants ────────────────────────────────────────────────────────────

pub fn decode_participants(id: i64, v: Value) -> Result<Option<i64>> {
  match v {
    Value::Null => Ok(None),
    Value::Integer(n) => Ok(Some(n)),
    // Blank text is what older front ends stored for an empty field.
    Value::Text(s) if s.trim().is_empty() => Ok(None),
    Value::Text(s) => s.trim().parse().map(Some).map_err(|_| {
      Error::Corrupt(format!("record {id}: total_participants is {s:?}"))
    }),
    other => Err(Error::Corrupt(format!(
      "record {id}: total_participants has type {}",
      other.data_type()
    ))),
  }
}

// ─── Raw row ─────────────────────────────────────────────────────────────────

/// Column values of one `functions` row, before participant decoding.
pub struct RawRecord {
  pub id:                  i64,
  pub function_date:       String,
  pub function_name:       String,
  pub organised_by:        String,
  pub resource_person:     String,
  pub time:                String,
  pub total_participants:  Value,
  pub photo_path:          String,
  pub welcome_address:     String,
  pub chief_guest_address: String,
  pub vote_of_thanks:      String,
}

impl RawRecord {
  /// Read a row selected with [`crate::store::SELECT_ALL`].
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawRecord {
      id:                  row.get(0)?,
      function_date:       row.get(1)?,
      function_name:       row.get(2)?,
      organised_by:        row.get(3)?,
      resource_person:     row.get(4)?,
      time:                row.get(5)?,
      total_participants:  row.get(6)?,
      photo_path:          row.get(7)?,
      welcome_address:     row.get(8)?,
      chief_guest_address: row.get(9)?,
      vote_of_thanks:      row.get(10)?,
    })
  }

  pub fn into_record(self) -> Result<FunctionRecord> {
    let total_participants =
      decode_participants(self.id, self.total_participants)?;

    Ok(FunctionRecord {
      id:     RecordId(self.id),
      fields: NewFunctionRecord {
        function_date: self.function_date,
        function_name: self.function_name,
        organised_by: self.organised_by,
        resource_person: self.resource_person,
        time: self.time,
        total_participants,
        photo_path: self.photo_path,
        welcome_address: self.welcome_address,
        chief_guest_address: self.chief_guest_address,
        vote_of_thanks: self.vote_of_thanks,
      },
    })
  }
}
