#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cdia() -> Command {
    cargo_bin_cmd!("contadia")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_contadia.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a CSV fixture into the temp dir and return its path
pub fn write_fixture(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fixture.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write fixture");
    p
}

/// Initialize the schema and default settings (test mode: no config file)
pub fn init_db(db_path: &str) {
    cdia()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Open the test DB directly for assertions
pub fn open_db(db_path: &str) -> rusqlite::Connection {
    rusqlite::Connection::open(db_path).expect("open db")
}

/// Load (timestamp, kind, amount) rows in display order
pub fn event_rows(db_path: &str) -> Vec<(String, String, f64)> {
    let conn = open_db(db_path);
    let mut stmt = conn
        .prepare("SELECT timestamp, kind, amount FROM events ORDER BY pos ASC, id ASC")
        .expect("prepare");
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
            ))
        })
        .expect("query");
    rows.map(|r| r.expect("row")).collect()
}
