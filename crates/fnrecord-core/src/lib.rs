//! Core types and trait definitions for the function record store.
//!
//! This crate is deliberately free of database and file-format dependencies.
//! The storage backend, the exporter and the CLI all depend on it.

pub mod error;
pub mod record;
pub mod store;

pub use error::{Error, Result};
pub use record::{
  COLUMNS, FunctionRecord, FunctionRecordInput, NewFunctionRecord, RecordId,
};
pub use store::RecordStore;
