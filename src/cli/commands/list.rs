use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::period_bounds;
use crate::utils::table::render_entries;

/// List entries newest first, optionally filtered by period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, limit } = cmd {
        let store = EntryStore::open(&cfg.database)?;

        let mut entries = match period {
            None => queries::get_all_entries(&store)?,
            Some(p) if p.eq_ignore_ascii_case("all") => queries::get_all_entries(&store)?,
            Some(p) => {
                let (start, end) = period_bounds(p)?;
                queries::entries_by_date_range(&store, &start, &end)?
            }
        };

        if let Some(n) = limit {
            entries.truncate(*n);
        }

        if entries.is_empty() {
            info("No entries recorded.");
            return Ok(());
        }

        println!("{}", render_entries(&entries));
        println!("{} entries", entries.len());
    }

    Ok(())
}
