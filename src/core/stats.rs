//! Pure aggregation over in-memory entry collections.
//!
//! Every function here is deterministic given `(entries, now)`, keeps no
//! state between calls and never touches the store; callers re-run them on
//! whatever snapshot they currently hold.

use crate::models::entry::Entry;
use crate::models::entry_type::EntryType;
use crate::utils::date::{month_name, previous_month};
use chrono::{DateTime, Datelike, Local, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyStats {
    pub lucky_count: usize,
    pub unlucky_count: usize,
    pub net_score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightStats {
    pub top_lucky: CategoryCount,
    pub top_unlucky: CategoryCount,
    pub last_month_net: i64,
    pub last_month_name: &'static str,
}

/// Calendar month+year of a timestamp in the user's timezone. All monthly
/// bucketing goes through local time, not fixed-width UTC windows.
fn local_year_month(date: &DateTime<Utc>) -> (i32, u32) {
    let local = date.with_timezone(&Local);
    (local.year(), local.month())
}

/// Entries recorded in the same local calendar month and year as `now`.
pub fn current_month_entries<'a>(entries: &'a [Entry], now: DateTime<Local>) -> Vec<&'a Entry> {
    let wanted = (now.year(), now.month());
    entries
        .iter()
        .filter(|e| local_year_month(&e.date) == wanted)
        .collect()
}

/// Counts and net score for one month's entries. Neutral entries count
/// toward neither side and contribute nothing to the net score.
pub fn monthly_stats(month_entries: &[&Entry]) -> MonthlyStats {
    let mut lucky_count = 0;
    let mut unlucky_count = 0;
    let mut net_score: i64 = 0;

    for e in month_entries {
        match e.kind {
            EntryType::Lucky => {
                lucky_count += 1;
                net_score += e.score as i64;
            }
            EntryType::Unlucky => {
                unlucky_count += 1;
                net_score -= e.score as i64;
            }
            EntryType::Neutral => {}
        }
    }

    MonthlyStats {
        lucky_count,
        unlucky_count,
        net_score,
    }
}

/// Most frequent category among `entries`, with its count.
///
/// Counting uses an insertion-ordered list, so a tie resolves toward the
/// category encountered first in the input. Empty input yields the
/// `{ "None", 0 }` sentinel rather than an error.
pub fn top_category(entries: &[&Entry]) -> CategoryCount {
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for e in entries {
        match counts.iter_mut().find(|(name, _)| *name == e.category.as_str()) {
            Some((_, n)) => *n += 1,
            None => counts.push((e.category.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, n) in counts {
        if best.is_none_or(|(_, m)| n > m) {
            best = Some((name, n));
        }
    }

    match best {
        Some((name, count)) => CategoryCount {
            name: name.to_string(),
            count,
        },
        None => CategoryCount {
            name: "None".to_string(),
            count: 0,
        },
    }
}

/// Month-level insights: top lucky and unlucky categories for the current
/// local month, plus the signed `actual_value` sum over *all* entries of
/// the month immediately before `now`'s. The previous month crosses the
/// year boundary: a January `now` looks at December of the previous year.
pub fn insight_stats(entries: &[Entry], now: DateTime<Local>) -> InsightStats {
    let month = current_month_entries(entries, now);

    let lucky: Vec<&Entry> = month.iter().copied().filter(|e| e.kind.is_lucky()).collect();
    let unlucky: Vec<&Entry> = month
        .iter()
        .copied()
        .filter(|e| e.kind.is_unlucky())
        .collect();

    let (last_year, last_month) = previous_month(now.year(), now.month());
    let last_month_net = entries
        .iter()
        .filter(|e| local_year_month(&e.date) == (last_year, last_month))
        .map(|e| e.actual_value)
        .sum();

    InsightStats {
        top_lucky: top_category(&lucky),
        top_unlucky: top_category(&unlucky),
        last_month_net,
        last_month_name: month_name(last_month),
    }
}
