//! Function records — one entry per event held by the store.
//!
//! Form front ends hand over every field as text. [`FunctionRecordInput`]
//! carries that text unchanged; [`FunctionRecordInput::validate`] coerces it
//! into a typed [`NewFunctionRecord`] before anything reaches storage.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Columns ─────────────────────────────────────────────────────────────────

/// Column names in their fixed order: `id` followed by the ten data fields.
///
/// Used for the table DDL, every `SELECT` list and the export header row.
pub const COLUMNS: [&str; 11] = [
  "id",
  "function_date",
  "function_name",
  "organised_by",
  "resource_person",
  "time",
  "total_participants",
  "photo_path",
  "welcome_address",
  "chief_guest_address",
  "vote_of_thanks",
];

// ─── RecordId ────────────────────────────────────────────────────────────────

/// Store-assigned primary key of a function record.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
  pub fn get(self) -> i64 { self.0 }
}

impl fmt::Display for RecordId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for RecordId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    s.trim().parse::<i64>().map(RecordId).map_err(|_| Error::Validation {
      field: "id",
      value: s.to_owned(),
    })
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A persisted function record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
  pub id:     RecordId,
  #[serde(flatten)]
  pub fields: NewFunctionRecord,
}

/// The ten data fields of a record, typed and ready to be written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFunctionRecord {
  pub function_date:       String,
  pub function_name:       String,
  pub organised_by:        String,
  pub resource_person:     String,
  pub time:                String,
  /// `None` when the form left the count blank.
  pub total_participants:  Option<i64>,
  /// Path handed over by the file picker; never checked for existence.
  pub photo_path:          String,
  pub welcome_address:     String,
  pub chief_guest_address: String,
  pub vote_of_thanks:      String,
}

/// Raw form input: every field exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FunctionRecordInput {
  #[serde(default)]
  pub function_date:       String,
  #[serde(default)]
  pub function_name:       String,
  #[serde(default)]
  pub organised_by:        String,
  #[serde(default)]
  pub resource_person:     String,
  #[serde(default)]
  pub time:                String,
  #[serde(default)]
  pub total_participants:  String,
  #[serde(default)]
  pub photo_path:          String,
  #[serde(default)]
  pub welcome_address:     String,
  #[serde(default)]
  pub chief_guest_address: String,
  #[serde(default)]
  pub vote_of_thanks:      String,
}

impl FunctionRecordInput {
  /// Coerce the form text into a [`NewFunctionRecord`].
  ///
  /// Text fields pass through verbatim. `total_participants` must be blank or
  /// an integer (surrounding whitespace allowed); anything else is a
  /// [`Error::Validation`].
  pub fn validate(self) -> Result<NewFunctionRecord> {
    let total_participants =
      parse_participants(&self.total_participants)?;

    Ok(NewFunctionRecord {
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
    })
  }
}

fn parse_participants(raw: &str) -> Result<Option<i64>> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Ok(None);
  }
  trimmed
    .parse::<i64>()
    .map(Some)
    .map_err(|_| Error::Validation {
      field: "total_participants",
      value: raw.to_owned(),
    })
}
