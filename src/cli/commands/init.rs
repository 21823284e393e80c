use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create configuration and database files, then bring the schema up to
/// date so the first real command finds a ready store.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    EntryStore::open(&cfg.database)?;
    success("Database initialized.");

    Ok(())
}
