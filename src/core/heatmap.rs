//! Per-day score sums and their display buckets for the calendar heatmap.

use crate::models::entry::Entry;
use crate::utils::date::{WeekStart, days_in_month, first_weekday_index};
use chrono::Datelike;

/// Discrete display bucket for a day score. `NoData` marks a day with no
/// entries, which is distinct from a day whose entries sum to exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBucket {
    NoData,
    StrongNegative,
    WeakNegative,
    Zero,
    WeakPositive,
    StrongPositive,
}

/// Classify a day score. Fixed thresholds: ±5 splits weak from strong.
pub fn color_bucket(score: Option<i64>) -> ColorBucket {
    match score {
        None => ColorBucket::NoData,
        Some(s) if s <= -5 => ColorBucket::StrongNegative,
        Some(s) if s < 0 => ColorBucket::WeakNegative,
        Some(0) => ColorBucket::Zero,
        Some(s) if s >= 5 => ColorBucket::StrongPositive,
        Some(_) => ColorBucket::WeakPositive,
    }
}

/// Signed `actual_value` sums per calendar day of `(year, month)`, bucketed
/// by each entry's local date. Index 0 is day 1; days without entries stay
/// `None`.
pub fn heatmap_scores(entries: &[Entry], year: i32, month: u32) -> Vec<Option<i64>> {
    let days = days_in_month(year, month) as usize;
    let mut scores: Vec<Option<i64>> = vec![None; days];

    for e in entries {
        let local = e.local_date();
        if local.year() == year && local.month() == month {
            let slot = &mut scores[(local.day() - 1) as usize];
            *slot = Some(slot.unwrap_or(0) + e.actual_value);
        }
    }

    scores
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatmapCell {
    /// Alignment-only cell before day 1; carries no score.
    Pad,
    Day { day: u32, score: Option<i64> },
}

/// Calendar-grid cells for one month: leading padding up to the weekday of
/// day 1 (relative to the configured week start), then one cell per day.
pub fn heatmap_cells(
    entries: &[Entry],
    year: i32,
    month: u32,
    week_start: WeekStart,
) -> Vec<HeatmapCell> {
    let padding = first_weekday_index(year, month, week_start);
    let mut cells = Vec::with_capacity((padding + days_in_month(year, month)) as usize);

    for _ in 0..padding {
        cells.push(HeatmapCell::Pad);
    }
    for (i, score) in heatmap_scores(entries, year, month).into_iter().enumerate() {
        cells.push(HeatmapCell::Day {
            day: i as u32 + 1,
            score,
        });
    }

    cells
}
