use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::heatmap::{ColorBucket, HeatmapCell, color_bucket, heatmap_cells};
use crate::db::queries;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{
    BG_STRONG_GREEN, BG_STRONG_RED, BG_WEAK_GREEN, BG_WEAK_RED, BG_ZERO, BOLD, GREY, RESET,
};
use crate::utils::date::{WeekStart, month_name, parse_year_month, today};
use chrono::Datelike;

/// Render one month of daily net scores as a calendar grid.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Heatmap { month } = cmd {
        let (year, mon) = match month {
            Some(s) => parse_year_month(s)?,
            None => {
                let now = today();
                (now.year(), now.month())
            }
        };

        let store = EntryStore::open(&cfg.database)?;
        let entries = queries::get_all_entries(&store)?;

        let week_start = WeekStart::from_config(&cfg.week_start);
        let cells = heatmap_cells(&entries, year, mon, week_start);

        println!("{BOLD}📅 {} {}{RESET}", month_name(mon), year);

        for label in week_start.labels() {
            print!("{GREY}{:>4}{RESET}", label);
        }
        println!();

        for (i, cell) in cells.iter().enumerate() {
            match cell {
                HeatmapCell::Pad => print!("    "),
                HeatmapCell::Day { day, score } => print!("{}", paint(*day, *score)),
            }
            if (i + 1) % 7 == 0 {
                println!();
            }
        }
        if cells.len() % 7 != 0 {
            println!();
        }

        if entries.is_empty() {
            info("No entries recorded yet.");
        }
    }

    Ok(())
}

fn paint(day: u32, score: Option<i64>) -> String {
    match color_bucket(score) {
        ColorBucket::NoData => format!("{GREY}{:>4}{RESET}", day),
        ColorBucket::StrongNegative => format!("{BG_STRONG_RED}{:>4}{RESET}", day),
        ColorBucket::WeakNegative => format!("{BG_WEAK_RED}{:>4}{RESET}", day),
        ColorBucket::Zero => format!("{BG_ZERO}{:>4}{RESET}", day),
        ColorBucket::WeakPositive => format!("{BG_WEAK_GREEN}{:>4}{RESET}", day),
        ColorBucket::StrongPositive => format!("{BG_STRONG_GREEN}{:>4}{RESET}", day),
    }
}
