use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Inspect the configuration file.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("# {}", path.display());
                println!("{}", content);
            } else {
                info(format!(
                    "No config file at {}; defaults are in effect.",
                    path.display()
                ));
            }
        }

        if *check {
            if !path.exists() {
                info("No config file found; run `luckylog init` to create one.");
                return Ok(());
            }

            let content = fs::read_to_string(&path)?;
            let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("not valid YAML: {}", e)))?;

            let mut missing = Vec::new();
            for key in ["database", "default_category", "week_start"] {
                if yaml.get(key).is_none() {
                    missing.push(key);
                }
            }

            if missing.is_empty() {
                success("Config file OK.");
            } else {
                warning(format!(
                    "Missing fields (defaults apply): {}",
                    missing.join(", ")
                ));
            }
        }

        if !*print_config && !*check {
            info("Nothing to do. Try --print or --check.");
        }
    }

    Ok(())
}
