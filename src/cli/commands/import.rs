use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut store = EntryStore::open(&cfg.database)?;
        let imported = ExportLogic::import(&mut store, file)?;
        success(format!("Imported {} entries from {}", imported, file));
    }

    Ok(())
}
