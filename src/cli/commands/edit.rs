use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry_type::EntryType;
use crate::ui::messages::success;

/// Edit an existing entry. The whole record is replaced via upsert; the
/// store re-derives `actual_value` from the updated kind and score.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        kind,
        score,
        category,
        note,
    } = cmd
    {
        let store = EntryStore::open(&cfg.database)?;

        let mut entry = queries::get_entry(&store, *id)?.ok_or(AppError::EntryNotFound(*id))?;

        if let Some(k) = kind {
            entry.kind =
                EntryType::from_code(k).ok_or_else(|| AppError::InvalidEntryType(k.to_string()))?;
        }
        if let Some(s) = score {
            entry.score = *s;
        }
        if let Some(c) = category {
            entry.category = c.clone();
        }
        if let Some(n) = note {
            entry.note = n.clone();
        }

        queries::upsert_entry(&store, &entry)?;

        success(format!(
            "Updated entry #{} ({}, {})",
            entry.id,
            entry.signed_score(),
            entry.category
        ));
    }

    Ok(())
}
