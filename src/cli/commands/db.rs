use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::info::print_db_info;
use crate::db::migrate::run_pending_migrations;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Database maintenance: migrations, integrity check, vacuum, info.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        // Opening the store already applies pending migrations.
        let store = EntryStore::open(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&store.conn)?;
            success("Database schema is up to date.");
        }

        if *check {
            let result: String = store
                .conn
                .query_row("PRAGMA integrity_check", [], |r| r.get(0))
                .map_err(AppError::StorageRead)?;
            if result == "ok" {
                success("Integrity check passed.");
            } else {
                return Err(AppError::Other(format!("Integrity check failed: {}", result)));
            }
        }

        if *vacuum {
            store
                .conn
                .execute_batch("VACUUM")
                .map_err(AppError::StorageWrite)?;
            success("Database vacuumed.");
        }

        if *show_info {
            print_db_info(&store, &cfg.database)?;
        }

        if !*migrate && !*check && !*vacuum && !*show_info {
            info("Nothing to do. Try --migrate, --check, --vacuum or --info.");
        }
    }

    Ok(())
}
