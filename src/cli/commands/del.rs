use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Delete an entry by id. A missing id is reported but is not an error.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let store = EntryStore::open(&cfg.database)?;

        let removed = queries::delete_entry(&store, *id)?;
        if removed == 0 {
            info(format!("No entry with id {}, nothing deleted.", id));
        } else {
            success(format!("Deleted entry #{}", id));
        }
    }

    Ok(())
}
