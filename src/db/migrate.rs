use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

fn mig_err(e: rusqlite::Error) -> AppError {
    AppError::Migration(e.to_string())
}

/// Ensure that the `log` table exists. It doubles as the applied-migrations
/// ledger, so it must be created before anything else runs.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
    .map_err(mig_err)
}

/// Check if the `entries` table exists.
fn entries_table_exists(conn: &Connection) -> AppResult<bool> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='entries'")
        .map_err(mig_err)?;
    let exists: Option<String> = stmt
        .query_row([], |row| row.get(0))
        .optional()
        .map_err(mig_err)?;
    Ok(exists.is_some())
}

/// Check if the `entries` table has a `note` column.
fn entries_has_note_column(conn: &Connection) -> AppResult<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('entries')").map_err(mig_err)?;
    let cols = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(mig_err)?;

    for c in cols {
        if c.map_err(mig_err)? == "note" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `entries` table with the modern schema.
///
/// `id` is the primary key (caller-assigned epoch millis, upsert semantics);
/// `date` carries a non-unique secondary index for range scans.
fn create_entries_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id           INTEGER PRIMARY KEY,
            date         TEXT NOT NULL,
            kind         TEXT NOT NULL CHECK(kind IN ('lucky','unlucky','neutral')),
            score        INTEGER NOT NULL CHECK(score BETWEEN 0 AND 5),
            actual_value INTEGER NOT NULL,
            category     TEXT NOT NULL,
            note         TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
        "#,
    )
    .map_err(mig_err)
}

/// Migrate an old `entries` table to include the `note` column.
/// Tracked by version in the `log` table; the column probe keeps it
/// idempotent even when the ledger row is missing.
fn migrate_add_note_column(conn: &Connection) -> AppResult<()> {
    let version = "20250412_0003_add_note_column";

    let mut chk = conn
        .prepare("SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1")
        .map_err(mig_err)?;
    if chk
        .query_row([version], |_| Ok(()))
        .optional()
        .map_err(mig_err)?
        .is_some()
    {
        return Ok(());
    }

    if !entries_has_note_column(conn)? {
        conn.execute(
            "ALTER TABLE entries ADD COLUMN note TEXT NOT NULL DEFAULT ''",
            [],
        )
        .map_err(|e| AppError::Migration(format!("Failed to add 'note' column: {}", e)))?;

        success(format!(
            "Migration applied: {} → added 'note' to entries table",
            version
        ));
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added note column to entries')",
        [version],
    )
    .map_err(mig_err)?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from EntryStore::open(). Safe to run against any schema state:
/// a fresh file gets the full modern schema, an old database gains only
/// what it is missing (the date index, the note column) without its rows
/// being touched.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    if !entries_table_exists(conn)? {
        create_entries_table(conn)?;
        return Ok(());
    }

    // Re-issue index creation so databases written before the date index
    // existed gain it in place. CREATE INDEX IF NOT EXISTS is idempotent.
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);")
        .map_err(mig_err)?;

    migrate_add_note_column(conn)?;

    Ok(())
}
