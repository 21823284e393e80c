use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{current_month_entries, insight_stats, monthly_stats};
use crate::db::queries;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{BOLD, GREEN, GREY, RED, RESET};
use crate::utils::date::{month_name, parse_year_month, today};
use chrono::{DateTime, Datelike, Local, TimeZone};

/// Monthly statistics and insights for the chosen month (default: the
/// current local month).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { month } = cmd {
        let store = EntryStore::open(&cfg.database)?;
        let entries = queries::get_all_entries(&store)?;

        let now = resolve_now(month)?;

        let month_entries = current_month_entries(&entries, now);
        let stats = monthly_stats(&month_entries);
        let insights = insight_stats(&entries, now);

        println!(
            "{BOLD}📅 {} {}{RESET}",
            month_name(now.month()),
            now.year()
        );
        println!("Lucky entries:   {GREEN}{}{RESET}", stats.lucky_count);
        println!("Unlucky entries: {RED}{}{RESET}", stats.unlucky_count);
        println!("Net score:       {}", signed(stats.net_score));
        println!();
        println!(
            "Top lucky category:   {} ({} mentions)",
            insights.top_lucky.name, insights.top_lucky.count
        );
        println!(
            "Top unlucky category: {} ({} mentions)",
            insights.top_unlucky.name, insights.top_unlucky.count
        );
        println!(
            "Last month ({}): {}",
            insights.last_month_name,
            signed(insights.last_month_net)
        );
    }

    Ok(())
}

/// A `--month YYYY-MM` override is turned into a mid-month local instant so
/// the pure aggregation functions can keep taking a plain "now".
fn resolve_now(month: &Option<String>) -> AppResult<DateTime<Local>> {
    match month {
        None => Ok(today()),
        Some(s) => {
            let (year, month) = parse_year_month(s)?;
            Local
                .with_ymd_and_hms(year, month, 15, 12, 0, 0)
                .earliest()
                .ok_or_else(|| AppError::InvalidDate(s.to_string()))
        }
    }
}

fn signed(value: i64) -> String {
    if value > 0 {
        format!("{GREEN}+{}{RESET}", value)
    } else if value < 0 {
        format!("{RED}{}{RESET}", value)
    } else {
        format!("{GREY}0{RESET}")
    }
}
