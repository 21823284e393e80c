use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use std::path::Path;

/// Serialize the collection as a pretty-printed JSON array of full entry
/// records, re-importable as-is.
pub fn to_json(entries: &[Entry]) -> AppResult<String> {
    serde_json::to_string_pretty(entries).map_err(|e| AppError::Export(e.to_string()))
}

pub fn write_json(path: &Path, entries: &[Entry]) -> AppResult<()> {
    std::fs::write(path, to_json(entries)?)?;
    Ok(())
}

/// Parse an import payload. The top-level value must be a JSON array and
/// every element must be a well-formed entry record; anything else rejects
/// the whole payload before a single write happens.
pub fn parse_entries(text: &str) -> AppResult<Vec<Entry>> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| AppError::ImportFormat(format!("not valid JSON: {}", e)))?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        _ => {
            return Err(AppError::ImportFormat(
                "expected a JSON array of entries".to_string(),
            ));
        }
    };

    let mut entries = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        let entry: Entry = serde_json::from_value(item)
            .map_err(|e| AppError::ImportFormat(format!("record {}: {}", i, e)))?;
        entries.push(entry);
    }

    Ok(entries)
}
