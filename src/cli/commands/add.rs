use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::entry_type::EntryType;
use crate::ui::messages::success;
use crate::utils::date::parse_when;
use chrono::Utc;

/// Log a new entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        kind,
        score,
        category,
        note,
        date,
    } = cmd
    {
        let kind = EntryType::from_code(kind)
            .ok_or_else(|| AppError::InvalidEntryType(kind.to_string()))?;

        // Default magnitude: 0 for neutral, 1 otherwise; explicit values are
        // validated against the per-kind range before anything is written.
        let score = score.unwrap_or(match kind {
            EntryType::Neutral => 0,
            _ => 1,
        });
        if !kind.valid_score(score) {
            return Err(AppError::InvalidScore {
                kind: kind.to_db_str(),
                score,
            });
        }

        let when = match date {
            Some(s) => parse_when(s)?,
            None => Utc::now(),
        };

        let category = category
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| cfg.default_category.clone());

        let entry = Entry::new(kind, score, category, note.clone(), when);

        let store = EntryStore::open(&cfg.database)?;
        let id = queries::upsert_entry(&store, &entry)?;

        success(format!(
            "Logged {} entry #{} ({}, {})",
            kind.to_db_str(),
            id,
            entry.signed_score(),
            entry.category
        ));
    }

    Ok(())
}
