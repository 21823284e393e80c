use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use csv::Writer;
use std::path::Path;

/// Write entries as CSV, one row per entry, full field set.
pub fn write_csv(path: &Path, entries: &[Entry]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(["id", "date", "type", "score", "actual_value", "category", "note"])
        .map_err(|e| AppError::Export(e.to_string()))?;

    for e in entries {
        wtr.write_record(&[
            e.id.to_string(),
            e.date_str(),
            e.kind.to_db_str().to_string(),
            e.score.to_string(),
            e.actual_value.to_string(),
            e.category.clone(),
            e.note.clone(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
