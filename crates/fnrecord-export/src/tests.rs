//! Export tests against an in-memory store and a temporary directory.

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use fnrecord_core::{COLUMNS, NewFunctionRecord, RecordStore};
use fnrecord_store_sqlite::SqliteStore;
use tempfile::TempDir;

use crate::{Error, export, writer::MAX_XLSX_CELL_CHARS};

async fn seeded(n: i64) -> SqliteStore {
  let s = SqliteStore::open_in_memory().await.unwrap();
  for i in 0..n {
    s.create(NewFunctionRecord {
      function_date: format!("2024-05-{:02}", i + 1),
      function_name: format!("Function {i}"),
      organised_by: "Dept, X".into(),
      total_participants: (i % 2 == 0).then_some(i * 10),
      welcome_address: "multi\nline".into(),
      ..NewFunctionRecord::default()
    })
    .await
    .unwrap();
  }
  s
}

fn read_csv(path: &std::path::Path) -> Vec<Vec<String>> {
  let mut rdr = csv::ReaderBuilder::new()
    .has_headers(false)
    .from_path(path)
    .unwrap();
  rdr
    .records()
    .map(|r| r.unwrap().iter().map(str::to_owned).collect())
    .collect()
}

#[tokio::test]
async fn csv_has_header_plus_one_row_per_record() {
  let dir = TempDir::new().unwrap();
  let dest = dir.path().join("report.csv");
  let store = seeded(3).await;

  let written = export(&store, &dest).await.unwrap();
  assert_eq!(written, dest);

  let rows = read_csv(&dest);
  assert_eq!(rows.len(), store.count().await.unwrap() as usize + 1);
  assert_eq!(rows[0], COLUMNS);
}

#[tokio::test]
async fn csv_cells_match_stored_values() {
  let dir = TempDir::new().unwrap();
  let dest = dir.path().join("report.csv");
  let store = seeded(2).await;
  let records = store.list().await.unwrap();

  export(&store, &dest).await.unwrap();
  let rows = read_csv(&dest);

  assert_eq!(rows[1][0], records[0].id.to_string());
  assert_eq!(rows[1][2], "Function 0");
  assert_eq!(rows[1][3], "Dept, X");
  assert_eq!(rows[1][6], "0");
  assert_eq!(rows[1][8], "multi\nline");
  assert_eq!(rows[2][6], "");
}

#[tokio::test]
async fn empty_store_exports_header_only() {
  let dir = TempDir::new().unwrap();
  let dest = dir.path().join("empty.csv");
  let store = seeded(0).await;

  export(&store, &dest).await.unwrap();
  assert_eq!(read_csv(&dest), vec![COLUMNS.map(str::to_owned).to_vec()]);
}

fn read_xlsx(path: &std::path::Path) -> (Vec<String>, Range<Data>) {
  let mut wb: Xlsx<_> = open_workbook(path).unwrap();
  let names = wb.sheet_names();
  let range = wb.worksheet_range(&names[0]).unwrap();
  (names, range)
}

fn number(cell: Option<&Data>) -> Option<f64> {
  match cell {
    Some(Data::Float(f)) => Some(*f),
    Some(Data::Int(n)) => Some(*n as f64),
    _ => None,
  }
}

#[tokio::test]
async fn xlsx_is_one_sheet_with_header_and_typed_cells() {
  let dir = TempDir::new().unwrap();
  let dest = dir.path().join("function_report.xlsx");
  let store = seeded(4).await;
  let records = store.list().await.unwrap();

  let written = export(&store, &dest).await.unwrap();
  let (names, range) = read_xlsx(&written);

  assert_eq!(names, ["functions"]);
  assert_eq!(range.height(), records.len() + 1);
  assert_eq!(range.width(), COLUMNS.len());

  let header: Vec<String> = range
    .rows()
    .next()
    .unwrap()
    .iter()
    .map(|c| c.to_string())
    .collect();
  assert_eq!(header, COLUMNS);

  for (i, rec) in records.iter().enumerate() {
    let row = i as u32 + 1;
    assert_eq!(number(range.get_value((row, 0))), Some(rec.id.get() as f64));
    assert_eq!(
      range.get_value((row, 2)),
      Some(&Data::String(rec.fields.function_name.clone()))
    );
    let participants = range.get_value((row, 6));
    match rec.fields.total_participants {
      Some(n) => assert_eq!(number(participants), Some(n as f64)),
      None => assert!(matches!(participants, None | Some(Data::Empty))),
    }
  }
}

#[tokio::test]
async fn empty_store_xlsx_is_header_only() {
  let dir = TempDir::new().unwrap();
  let store = seeded(0).await;

  let written = export(&store, dir.path().join("empty.xlsx")).await.unwrap();
  let (_, range) = read_xlsx(&written);

  assert_eq!(range.height(), 1);
}

#[tokio::test]
async fn oversized_text_still_exports() {
  let dir = TempDir::new().unwrap();
  let s = SqliteStore::open_in_memory().await.unwrap();
  let long = "x".repeat(40_000);
  s.create(NewFunctionRecord {
    function_name: "Long speech".into(),
    welcome_address: long.clone(),
    ..NewFunctionRecord::default()
  })
  .await
  .unwrap();

  let written = export(&s, dir.path().join("r.xlsx")).await.unwrap();
  let (_, range) = read_xlsx(&written);
  match range.get_value((1, 8)) {
    Some(Data::String(text)) => assert_eq!(text.chars().count(), MAX_XLSX_CELL_CHARS),
    other => panic!("unexpected welcome cell: {other:?}"),
  }
  assert_eq!(
    range.get_value((1, 2)),
    Some(&Data::String("Long speech".into()))
  );

  // CSV has no cell limit and the store itself is never clipped.
  let csv_path = export(&s, dir.path().join("r.csv")).await.unwrap();
  assert_eq!(read_csv(&csv_path)[1][8], long);
  assert_eq!(s.list().await.unwrap()[0].fields.welcome_address, long);
}

#[cfg(unix)]
#[tokio::test]
async fn export_keeps_permissions_of_replaced_file() {
  use std::os::unix::fs::PermissionsExt as _;

  let dir = TempDir::new().unwrap();
  let store = seeded(1).await;

  for (name, mode) in [("shared.xlsx", 0o644), ("group.csv", 0o640)] {
    let dest = dir.path().join(name);
    std::fs::write(&dest, "old report").unwrap();
    std::fs::set_permissions(&dest, std::fs::Permissions::from_mode(mode)).unwrap();

    export(&store, &dest).await.unwrap();

    let got = std::fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
    assert_eq!(got, mode, "{name}");
  }
}

#[cfg(unix)]
#[tokio::test]
async fn read_only_report_is_replaced_and_stays_read_only() {
  use std::os::unix::fs::PermissionsExt as _;

  let dir = TempDir::new().unwrap();
  let dest = dir.path().join("locked.csv");
  std::fs::write(&dest, "old report").unwrap();
  std::fs::set_permissions(&dest, std::fs::Permissions::from_mode(0o444)).unwrap();
  let store = seeded(2).await;

  export(&store, &dest).await.unwrap();

  assert_eq!(read_csv(&dest).len(), 3);
  let got = std::fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
  assert_eq!(got, 0o444);
}

#[cfg(unix)]
#[tokio::test]
async fn new_export_gets_ordinary_create_mode() {
  use std::os::unix::fs::PermissionsExt as _;

  let dir = TempDir::new().unwrap();
  let store = seeded(1).await;

  let reference = dir.path().join("reference");
  std::fs::File::create(&reference).unwrap();
  let expected = std::fs::metadata(&reference).unwrap().permissions().mode() & 0o777;

  let dest = export(&store, dir.path().join("fresh.xlsx")).await.unwrap();
  let got = std::fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
  assert_eq!(got, expected);
}

#[tokio::test]
async fn export_overwrites_existing_file() {
  let dir = TempDir::new().unwrap();
  let dest = dir.path().join("report.csv");
  std::fs::write(&dest, "stale contents that are longer than the header").unwrap();
  let store = seeded(1).await;

  export(&store, &dest).await.unwrap();

  let rows = read_csv(&dest);
  assert_eq!(rows.len(), 2);
  assert_eq!(rows[0], COLUMNS);
}

#[tokio::test]
async fn export_leaves_no_temporary_files_behind() {
  let dir = TempDir::new().unwrap();
  let store = seeded(2).await;

  export(&store, dir.path().join("a.xlsx")).await.unwrap();
  export(&store, dir.path().join("b.csv")).await.unwrap();

  let mut names: Vec<String> = std::fs::read_dir(dir.path())
    .unwrap()
    .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
    .collect();
  names.sort();
  assert_eq!(names, ["a.xlsx", "b.csv"]);
}

#[tokio::test]
async fn missing_directory_is_an_io_error() {
  let dir = TempDir::new().unwrap();
  let dest = dir.path().join("no-such-dir").join("report.xlsx");
  let store = seeded(1).await;

  let err = export(&store, &dest).await.unwrap_err();
  assert!(matches!(err, Error::Io(_)), "got {err:?}");
  assert!(!dest.exists());
}

#[tokio::test]
async fn export_does_not_modify_the_store() {
  let dir = TempDir::new().unwrap();
  let store = seeded(3).await;
  let before = store.list().await.unwrap();

  export(&store, dir.path().join("r.csv")).await.unwrap();

  assert_eq!(store.list().await.unwrap(), before);
}
