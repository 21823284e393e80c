use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{log, queries};
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Delete every entry. Requires the --yes confirmation flag.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes {
            warning("This deletes ALL entries and cannot be undone. Re-run with --yes to confirm.");
            return Ok(());
        }

        let store = EntryStore::open(&cfg.database)?;
        let removed = queries::clear_entries(&store)?;

        let _ = log::record(
            &store.conn,
            "clear",
            "",
            &format!("Removed {} entries", removed),
        );

        success(format!("Removed {} entries.", removed));
    }

    Ok(())
}
