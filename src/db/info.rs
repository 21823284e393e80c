use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Print database file stats, entry counts per kind and the covered
/// date range.
pub fn print_db_info(store: &EntryStore, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    let count: i64 = store
        .conn
        .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
        .map_err(AppError::StorageRead)?;
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    let mut stmt = store
        .conn
        .prepare("SELECT kind, COUNT(*) FROM entries GROUP BY kind ORDER BY kind")
        .map_err(AppError::StorageRead)?;
    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })
        .map_err(AppError::StorageRead)?;
    for r in rows {
        let (kind, n) = r.map_err(AppError::StorageRead)?;
        println!("    {:<8} {}", kind, n);
    }

    let oldest: Option<String> = store
        .conn
        .query_row("SELECT date FROM entries ORDER BY date ASC LIMIT 1", [], |r| {
            r.get(0)
        })
        .optional()
        .map_err(AppError::StorageRead)?;

    let newest: Option<String> = store
        .conn
        .query_row("SELECT date FROM entries ORDER BY date DESC LIMIT 1", [], |r| {
            r.get(0)
        })
        .optional()
        .map_err(AppError::StorageRead)?;

    let fmt_oldest = oldest.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_newest = newest.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_oldest);
    println!("    to:   {}", fmt_newest);

    println!();
    Ok(())
}
