//! SQL schema for the function record store.
//!
//! Executed at connection startup and again by every explicit
//! `initialize` call.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps ids strictly increasing: SQLite never hands out an
/// id that was used before, even after the highest row disappears.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS functions (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    function_date       TEXT NOT NULL DEFAULT '',
    function_name       TEXT NOT NULL DEFAULT '',
    organised_by        TEXT NOT NULL DEFAULT '',
    resource_person     TEXT NOT NULL DEFAULT '',
    time                TEXT NOT NULL DEFAULT '',
    total_participants  INTEGER,          -- NULL when left blank
    photo_path          TEXT NOT NULL DEFAULT '',
    welcome_address     TEXT NOT NULL DEFAULT '',
    chief_guest_address TEXT NOT NULL DEFAULT '',
    vote_of_thanks      TEXT NOT NULL DEFAULT ''
);
";
