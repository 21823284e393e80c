use crate::db::store::EntryStore;
use crate::db::{log, queries};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::{parse_entries, write_json};
use crate::export::notify_export_success;
use crate::ui::messages::warning;
use crate::utils::date::period_bounds;
use std::fs;
use std::path::Path;

/// High-level export/import flows shared by the CLI handlers.
pub struct ExportLogic;

impl ExportLogic {
    /// Export entries to `file`.
    ///
    /// - `range`: `None`, `"all"`, or a period expression:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `start:end` mixing any of the above
    pub fn export(
        store: &EntryStore,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let entries = match range {
            None => queries::get_all_entries(store)?,
            Some(r) if r.eq_ignore_ascii_case("all") => queries::get_all_entries(store)?,
            Some(r) => {
                let (start, end) = period_bounds(r)?;
                queries::entries_by_date_range(store, &start, &end)?
            }
        };

        if entries.is_empty() {
            warning("No entries found for the selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Json => write_json(path, &entries)?,
            ExportFormat::Csv => write_csv(path, &entries)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }

    /// Import entries from a JSON export file. The payload is validated in
    /// full before anything is written; the writes themselves go through
    /// one atomic batch. Returns the number of imported entries.
    pub fn import(store: &mut EntryStore, file: &str) -> AppResult<usize> {
        let text = fs::read_to_string(file)?;
        let entries = parse_entries(&text)?;

        queries::upsert_many(store, &entries)?;

        let _ = log::record(
            &store.conn,
            "import",
            file,
            &format!("Imported {} entries", entries.len()),
        );

        Ok(entries.len())
    }
}
