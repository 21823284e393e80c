use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, UNCATEGORIZED};
use crate::models::entry_type::EntryType;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, Row, params};

const ENTRY_COLUMNS: &str = "id, date, kind, score, actual_value, category, note";

pub(crate) fn fmt_date(d: &DateTime<Utc>) -> String {
    d.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn map_row(row: &Row) -> rusqlite::Result<Entry> {
    let date_str: String = row.get("date")?;
    let date = DateTime::parse_from_rfc3339(&date_str)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(date_str.clone())),
            )
        })?;

    let kind_str: String = row.get("kind")?;
    let kind = EntryType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEntryType(kind_str)),
        )
    })?;

    Ok(Entry {
        id: row.get("id")?,
        date,
        kind,
        score: row.get("score")?,
        actual_value: row.get("actual_value")?,
        category: row.get("category")?,
        note: row.get("note")?,
    })
}

/// Validate the caller-visible fields and derive the stored redundant ones.
/// `actual_value` is always recomputed here (whatever the caller set is
/// ignored) and an empty category falls back to the uncategorized marker.
fn checked(entry: &Entry) -> AppResult<(i64, String)> {
    if !entry.kind.valid_score(entry.score) {
        return Err(AppError::InvalidScore {
            kind: entry.kind.to_db_str(),
            score: entry.score,
        });
    }

    let category = if entry.category.trim().is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        entry.category.clone()
    };

    Ok((entry.kind.signed_value(entry.score), category))
}

fn put(conn: &Connection, entry: &Entry, actual_value: i64, category: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (id, date, kind, score, actual_value, category, note)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(id) DO UPDATE SET
             date = excluded.date,
             kind = excluded.kind,
             score = excluded.score,
             actual_value = excluded.actual_value,
             category = excluded.category,
             note = excluded.note",
        params![
            entry.id,
            fmt_date(&entry.date),
            entry.kind.to_db_str(),
            entry.score,
            actual_value,
            category,
            entry.note,
        ],
    )
    .map_err(AppError::StorageWrite)?;
    Ok(())
}

/// Insert or replace the record at `entry.id`. Returns the key.
pub fn upsert_entry(store: &EntryStore, entry: &Entry) -> AppResult<i64> {
    let (actual_value, category) = checked(entry)?;
    put(&store.conn, entry, actual_value, &category)?;
    Ok(entry.id)
}

/// Apply many upserts as one transaction: either every record is visible
/// afterwards or none is. A single bad record rolls the whole batch back.
pub fn upsert_many(store: &mut EntryStore, entries: &[Entry]) -> AppResult<usize> {
    let tx = store.conn.transaction().map_err(AppError::StorageWrite)?;

    for entry in entries {
        let (actual_value, category) = checked(entry)?;
        put(&tx, entry, actual_value, &category)?;
    }

    tx.commit().map_err(AppError::StorageWrite)?;
    Ok(entries.len())
}

/// All entries, newest first. Ties on equal dates break on id (descending),
/// so the order is deterministic regardless of insertion order.
pub fn get_all_entries(store: &EntryStore) -> AppResult<Vec<Entry>> {
    let mut stmt = store
        .conn
        .prepare_cached(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries ORDER BY date DESC, id DESC"
        ))
        .map_err(AppError::StorageRead)?;
    let rows = stmt.query_map([], map_row).map_err(AppError::StorageRead)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(AppError::StorageRead)?);
    }
    Ok(out)
}

/// Single entry lookup by id.
pub fn get_entry(store: &EntryStore, id: i64) -> AppResult<Option<Entry>> {
    let mut stmt = store
        .conn
        .prepare_cached(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1"
        ))
        .map_err(AppError::StorageRead)?;

    match stmt.query_row([id], map_row) {
        Ok(e) => Ok(Some(e)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(AppError::StorageRead(e)),
    }
}

/// Remove the record at `id`. Deleting a missing id is a no-op, not an
/// error; the return value tells how many rows went away (0 or 1).
pub fn delete_entry(store: &EntryStore, id: i64) -> AppResult<usize> {
    store
        .conn
        .execute("DELETE FROM entries WHERE id = ?1", [id])
        .map_err(AppError::StorageWrite)
}

/// Remove every entry. Irreversible.
pub fn clear_entries(store: &EntryStore) -> AppResult<usize> {
    store
        .conn
        .execute("DELETE FROM entries", [])
        .map_err(AppError::StorageWrite)
}

/// Entries whose date falls within `[start, end]` inclusive, newest first.
/// The stored RFC 3339 strings compare lexicographically in chronological
/// order, so the range scan rides the date index.
pub fn entries_by_date_range(
    store: &EntryStore,
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
) -> AppResult<Vec<Entry>> {
    let mut stmt = store
        .conn
        .prepare_cached(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries
             WHERE date >= ?1 AND date <= ?2
             ORDER BY date DESC, id DESC"
        ))
        .map_err(AppError::StorageRead)?;
    let rows = stmt
        .query_map(params![fmt_date(start), fmt_date(end)], map_row)
        .map_err(AppError::StorageRead)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(AppError::StorageRead)?);
    }
    Ok(out)
}

pub fn count_entries(store: &EntryStore) -> AppResult<i64> {
    store
        .conn
        .query_row("SELECT COUNT(*) FROM entries", [], |r| r.get(0))
        .map_err(AppError::StorageRead)
}
