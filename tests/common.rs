#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use luckylog::db::store::EntryStore;
use luckylog::models::entry::Entry;
use luckylog::models::entry_type::EntryType;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lk() -> Command {
    cargo_bin_cmd!("luckylog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_luckylog.sqlite", name));
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

/// Open a store directly through the library API (runs migrations).
pub fn open_store(db_path: &str) -> EntryStore {
    EntryStore::open(db_path).expect("open store")
}

/// Build an entry with an explicit id and RFC 3339 date, deriving
/// actual_value the same way the write path does.
pub fn entry_at(id: i64, date: &str, kind: EntryType, score: u8, category: &str) -> Entry {
    Entry {
        id,
        date: DateTime::parse_from_rfc3339(date)
            .expect("valid rfc3339 date")
            .with_timezone(&Utc),
        kind,
        score,
        actual_value: kind.signed_value(score),
        category: category.to_string(),
        note: String::new(),
    }
}
