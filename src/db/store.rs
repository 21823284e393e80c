//! SQLite-backed entry store handle.

use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Open handle to the entry database.
///
/// Constructed once per command invocation, right after config resolution,
/// and passed by reference to every consumer. Opening is an all-or-nothing
/// outcome: either a usable, fully-migrated handle comes back or a typed
/// error does. There is no half-initialized state to observe.
pub struct EntryStore {
    pub conn: Connection,
}

impl EntryStore {
    /// Open (or create) the database at `path` and bring its schema up to
    /// date. Safe to call against a database created by an older version:
    /// the migration engine only adds what is missing.
    pub fn open(path: &str) -> AppResult<Self> {
        let p = Path::new(path);

        if let Some(parent) = p.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::StorageUnavailable(format!("{}: {}", parent.display(), e))
            })?;
        }

        let conn = Connection::open(p)
            .map_err(|e| AppError::StorageUnavailable(format!("{}: {}", p.display(), e)))?;

        run_pending_migrations(&conn)?;

        Ok(Self { conn })
    }
}
