//! Aggregation engine tests: pure functions over in-memory entries,
//! no database involved.

use chrono::{DateTime, Local, TimeZone, Utc};
use luckylog::core::stats::{
    CategoryCount, current_month_entries, insight_stats, monthly_stats, top_category,
};
use luckylog::models::entry::Entry;
use luckylog::models::entry_type::EntryType;

/// Entry pinned to a local calendar day (noon), so month bucketing behaves
/// the same regardless of the timezone the tests run in.
fn entry_local(id: i64, y: i32, m: u32, d: u32, kind: EntryType, score: u8, category: &str) -> Entry {
    let date = Local
        .with_ymd_and_hms(y, m, d, 12, 0, 0)
        .unwrap()
        .with_timezone(&Utc);
    Entry {
        id,
        date,
        kind,
        score,
        actual_value: kind.signed_value(score),
        category: category.to_string(),
        note: String::new(),
    }
}

fn local_now(y: i32, m: u32, d: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
}

#[test]
fn test_monthly_stats_counts_and_net_score() {
    // lucky(3) + lucky(2) + unlucky(4) → 2 lucky, 1 unlucky, net +1
    let entries = vec![
        entry_local(1, 2026, 8, 3, EntryType::Lucky, 3, "Work"),
        entry_local(2, 2026, 8, 10, EntryType::Lucky, 2, "Life"),
        entry_local(3, 2026, 8, 20, EntryType::Unlucky, 4, "Social"),
    ];
    let month: Vec<&Entry> = entries.iter().collect();

    let stats = monthly_stats(&month);
    assert_eq!(stats.lucky_count, 2);
    assert_eq!(stats.unlucky_count, 1);
    assert_eq!(stats.net_score, 1);
}

#[test]
fn test_monthly_stats_ignores_neutral_entries() {
    let entries = vec![
        entry_local(1, 2026, 8, 3, EntryType::Lucky, 2, "Work"),
        entry_local(2, 2026, 8, 4, EntryType::Neutral, 0, "Life"),
        entry_local(3, 2026, 8, 5, EntryType::Neutral, 4, "Life"),
    ];
    let month: Vec<&Entry> = entries.iter().collect();

    let stats = monthly_stats(&month);
    assert_eq!(stats.lucky_count, 1);
    assert_eq!(stats.unlucky_count, 0);
    assert_eq!(stats.net_score, 2);
}

#[test]
fn test_current_month_filters_by_local_month_and_year() {
    let entries = vec![
        entry_local(1, 2026, 8, 1, EntryType::Lucky, 1, "Work"),
        entry_local(2, 2026, 7, 31, EntryType::Lucky, 1, "Work"),
        entry_local(3, 2025, 8, 15, EntryType::Lucky, 1, "Work"), // same month, other year
        entry_local(4, 2026, 8, 31, EntryType::Unlucky, 1, "Work"),
    ];

    let month = current_month_entries(&entries, local_now(2026, 8, 15));
    let ids: Vec<i64> = month.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn test_top_category_empty_input_yields_sentinel() {
    assert_eq!(
        top_category(&[]),
        CategoryCount {
            name: "None".to_string(),
            count: 0
        }
    );
}

#[test]
fn test_top_category_picks_highest_count() {
    let entries = vec![
        entry_local(1, 2026, 8, 1, EntryType::Lucky, 1, "Work"),
        entry_local(2, 2026, 8, 2, EntryType::Lucky, 1, "Social"),
        entry_local(3, 2026, 8, 3, EntryType::Lucky, 1, "Work"),
    ];
    let refs: Vec<&Entry> = entries.iter().collect();

    let top = top_category(&refs);
    assert_eq!(top.name, "Work");
    assert_eq!(top.count, 2);
}

#[test]
fn test_top_category_tie_breaks_toward_first_seen() {
    let entries = vec![
        entry_local(1, 2026, 8, 1, EntryType::Lucky, 1, "Social"),
        entry_local(2, 2026, 8, 2, EntryType::Lucky, 1, "Work"),
        entry_local(3, 2026, 8, 3, EntryType::Lucky, 1, "Work"),
        entry_local(4, 2026, 8, 4, EntryType::Lucky, 1, "Social"),
    ];
    let refs: Vec<&Entry> = entries.iter().collect();

    // Social and Work both count 2; Social was seen first.
    let top = top_category(&refs);
    assert_eq!(top.name, "Social");
    assert_eq!(top.count, 2);
}

#[test]
fn test_insight_stats_top_categories_split_by_kind() {
    let entries = vec![
        entry_local(1, 2026, 8, 1, EntryType::Lucky, 2, "Work"),
        entry_local(2, 2026, 8, 2, EntryType::Lucky, 1, "Work"),
        entry_local(3, 2026, 8, 3, EntryType::Unlucky, 3, "Social"),
        entry_local(4, 2026, 8, 4, EntryType::Neutral, 0, "Life"),
    ];

    let insights = insight_stats(&entries, local_now(2026, 8, 15));
    assert_eq!(insights.top_lucky.name, "Work");
    assert_eq!(insights.top_lucky.count, 2);
    assert_eq!(insights.top_unlucky.name, "Social");
    assert_eq!(insights.top_unlucky.count, 1);
}

#[test]
fn test_insight_stats_last_month_sums_all_kinds() {
    let entries = vec![
        // July: +3 (lucky), -1 (unlucky), 0 (neutral) → net +2
        entry_local(1, 2026, 7, 5, EntryType::Lucky, 3, "Work"),
        entry_local(2, 2026, 7, 10, EntryType::Unlucky, 1, "Social"),
        entry_local(3, 2026, 7, 20, EntryType::Neutral, 0, "Life"),
        // August noise
        entry_local(4, 2026, 8, 1, EntryType::Unlucky, 5, "Work"),
    ];

    let insights = insight_stats(&entries, local_now(2026, 8, 15));
    assert_eq!(insights.last_month_net, 2);
    assert_eq!(insights.last_month_name, "July");
}

#[test]
fn test_insight_stats_january_looks_at_prior_december() {
    let entries = vec![
        entry_local(1, 2025, 12, 24, EntryType::Lucky, 4, "Life"),
        entry_local(2, 2025, 12, 31, EntryType::Unlucky, 1, "Work"),
        entry_local(3, 2026, 1, 2, EntryType::Lucky, 5, "Work"),
        entry_local(4, 2025, 1, 15, EntryType::Lucky, 5, "Work"), // January of the wrong year
    ];

    let insights = insight_stats(&entries, local_now(2026, 1, 10));
    assert_eq!(insights.last_month_net, 3);
    assert_eq!(insights.last_month_name, "December");
}

#[test]
fn test_aggregations_do_not_mutate_their_input() {
    let entries = vec![
        entry_local(1, 2026, 8, 1, EntryType::Lucky, 2, "Work"),
        entry_local(2, 2026, 8, 2, EntryType::Unlucky, 1, "Social"),
    ];
    let snapshot = entries.clone();

    let now = local_now(2026, 8, 15);
    let _ = insight_stats(&entries, now);
    let _ = monthly_stats(&current_month_entries(&entries, now));

    assert_eq!(entries, snapshot);
}
