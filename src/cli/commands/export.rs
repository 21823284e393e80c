use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = EntryStore::open(&cfg.database)?;
        ExportLogic::export(&store, format.clone(), file, range, *force)?;
    }

    Ok(())
}
