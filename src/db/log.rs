//! Internal audit log. Destructive operations (clear, import, backup) and
//! applied migrations leave a row here.

use chrono::Utc;
use rusqlite::{Connection, params};

pub fn record(
    conn: &Connection,
    operation: &str,
    target: &str,
    message: &str,
) -> rusqlite::Result<()> {
    let now = Utc::now().to_rfc3339();
    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![&now, operation, target, message])?;
    Ok(())
}
