mod common;
use common::{entry_at, open_store, setup_test_db};

use chrono::{DateTime, Utc};
use luckylog::db::queries;
use luckylog::errors::AppError;
use luckylog::models::entry_type::EntryType;

fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

#[test]
fn test_upsert_then_get_all_returns_exactly_one_record() {
    let db_path = setup_test_db("upsert_one");
    let store = open_store(&db_path);

    let e = entry_at(1000, "2025-06-01T10:00:00Z", EntryType::Lucky, 3, "Work");
    queries::upsert_entry(&store, &e).unwrap();

    let all = queries::get_all_entries(&store).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, 1000);
    assert_eq!(all[0].kind, EntryType::Lucky);
    assert_eq!(all[0].score, 3);
    assert_eq!(all[0].actual_value, 3);
    assert_eq!(all[0].category, "Work");
}

#[test]
fn test_upsert_is_idempotent_under_repetition() {
    let db_path = setup_test_db("upsert_idem");
    let store = open_store(&db_path);

    let e = entry_at(1000, "2025-06-01T10:00:00Z", EntryType::Lucky, 3, "Work");
    queries::upsert_entry(&store, &e).unwrap();
    queries::upsert_entry(&store, &e).unwrap();

    let all = queries::get_all_entries(&store).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], e);
}

#[test]
fn test_upsert_existing_id_overwrites_never_duplicates() {
    let db_path = setup_test_db("upsert_overwrite");
    let store = open_store(&db_path);

    let original = entry_at(1000, "2025-06-01T10:00:00Z", EntryType::Lucky, 3, "Work");
    queries::upsert_entry(&store, &original).unwrap();

    let mut edited = original.clone();
    edited.kind = EntryType::Unlucky;
    edited.score = 2;
    edited.category = "Social".to_string();
    edited.actual_value = edited.kind.signed_value(edited.score);
    queries::upsert_entry(&store, &edited).unwrap();

    let all = queries::get_all_entries(&store).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].kind, EntryType::Unlucky);
    assert_eq!(all[0].actual_value, -2);
    assert_eq!(all[0].category, "Social");
}

#[test]
fn test_get_all_sorted_by_date_descending() {
    let db_path = setup_test_db("order_desc");
    let store = open_store(&db_path);

    // Inserted out of order on purpose
    let a = entry_at(1, "2025-03-10T08:00:00Z", EntryType::Lucky, 1, "Work");
    let b = entry_at(2, "2025-06-20T08:00:00Z", EntryType::Lucky, 1, "Work");
    let c = entry_at(3, "2025-01-05T08:00:00Z", EntryType::Lucky, 1, "Work");
    for e in [&a, &b, &c] {
        queries::upsert_entry(&store, e).unwrap();
    }

    let ids: Vec<i64> = queries::get_all_entries(&store)
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[test]
fn test_equal_dates_tie_break_is_deterministic() {
    let db_path = setup_test_db("order_tie");
    let store = open_store(&db_path);

    let a = entry_at(1, "2025-06-20T08:00:00Z", EntryType::Lucky, 1, "Work");
    let b = entry_at(2, "2025-06-20T08:00:00Z", EntryType::Unlucky, 1, "Work");
    queries::upsert_entry(&store, &b).unwrap();
    queries::upsert_entry(&store, &a).unwrap();

    // Same instant → newer id (later creation) wins, regardless of
    // insertion order.
    let ids: Vec<i64> = queries::get_all_entries(&store)
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_delete_missing_id_is_a_noop() {
    let db_path = setup_test_db("del_missing");
    let store = open_store(&db_path);

    let e = entry_at(1000, "2025-06-01T10:00:00Z", EntryType::Neutral, 0, "Life");
    queries::upsert_entry(&store, &e).unwrap();

    let removed = queries::delete_entry(&store, 9999).unwrap();
    assert_eq!(removed, 0);
    assert_eq!(queries::count_entries(&store).unwrap(), 1);
}

#[test]
fn test_delete_removes_the_record() {
    let db_path = setup_test_db("del_one");
    let store = open_store(&db_path);

    let e = entry_at(1000, "2025-06-01T10:00:00Z", EntryType::Lucky, 2, "Work");
    queries::upsert_entry(&store, &e).unwrap();

    assert_eq!(queries::delete_entry(&store, 1000).unwrap(), 1);
    assert!(queries::get_all_entries(&store).unwrap().is_empty());
}

#[test]
fn test_clear_empties_the_store() {
    let db_path = setup_test_db("clear_all");
    let store = open_store(&db_path);

    for i in 0..5 {
        let e = entry_at(i, "2025-06-01T10:00:00Z", EntryType::Lucky, 1, "Work");
        queries::upsert_entry(&store, &e).unwrap();
    }

    assert_eq!(queries::clear_entries(&store).unwrap(), 5);
    assert_eq!(queries::count_entries(&store).unwrap(), 0);
}

#[test]
fn test_date_range_query_has_inclusive_bounds() {
    let db_path = setup_test_db("range_incl");
    let store = open_store(&db_path);

    let inside_start = entry_at(1, "2025-06-01T00:00:00Z", EntryType::Lucky, 1, "Work");
    let middle = entry_at(2, "2025-06-15T12:00:00Z", EntryType::Lucky, 1, "Work");
    let inside_end = entry_at(3, "2025-06-30T23:59:59Z", EntryType::Lucky, 1, "Work");
    let outside = entry_at(4, "2025-07-01T00:00:01Z", EntryType::Lucky, 1, "Work");
    for e in [&inside_start, &middle, &inside_end, &outside] {
        queries::upsert_entry(&store, e).unwrap();
    }

    let hits = queries::entries_by_date_range(
        &store,
        &utc("2025-06-01T00:00:00Z"),
        &utc("2025-06-30T23:59:59Z"),
    )
    .unwrap();

    let ids: Vec<i64> = hits.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn test_actual_value_is_recomputed_in_the_write_path() {
    let db_path = setup_test_db("actual_value");
    let store = open_store(&db_path);

    // A caller lying about actual_value gets corrected on write.
    let mut e = entry_at(1000, "2025-06-01T10:00:00Z", EntryType::Unlucky, 4, "Work");
    e.actual_value = 99;
    queries::upsert_entry(&store, &e).unwrap();

    let all = queries::get_all_entries(&store).unwrap();
    assert_eq!(all[0].actual_value, -4);
}

#[test]
fn test_empty_category_falls_back_to_uncategorized() {
    let db_path = setup_test_db("empty_category");
    let store = open_store(&db_path);

    let e = entry_at(1000, "2025-06-01T10:00:00Z", EntryType::Lucky, 1, "  ");
    queries::upsert_entry(&store, &e).unwrap();

    let all = queries::get_all_entries(&store).unwrap();
    assert_eq!(all[0].category, "Uncategorized");
}

#[test]
fn test_score_range_is_validated_per_kind() {
    let db_path = setup_test_db("score_range");
    let store = open_store(&db_path);

    // lucky/unlucky magnitudes start at 1
    let zero_lucky = entry_at(1, "2025-06-01T10:00:00Z", EntryType::Lucky, 0, "Work");
    assert!(matches!(
        queries::upsert_entry(&store, &zero_lucky),
        Err(AppError::InvalidScore { .. })
    ));

    let too_big = entry_at(2, "2025-06-01T10:00:00Z", EntryType::Unlucky, 6, "Work");
    assert!(matches!(
        queries::upsert_entry(&store, &too_big),
        Err(AppError::InvalidScore { .. })
    ));

    // neutral allows 0
    let neutral_zero = entry_at(3, "2025-06-01T10:00:00Z", EntryType::Neutral, 0, "Life");
    assert!(queries::upsert_entry(&store, &neutral_zero).is_ok());
}

#[test]
fn test_upsert_many_is_atomic_on_failure() {
    let db_path = setup_test_db("batch_atomic");
    let mut store = open_store(&db_path);

    let good = entry_at(1, "2025-06-01T10:00:00Z", EntryType::Lucky, 3, "Work");
    let bad = entry_at(2, "2025-06-02T10:00:00Z", EntryType::Lucky, 0, "Work");

    let result = queries::upsert_many(&mut store, &[good, bad]);
    assert!(result.is_err());

    // Nothing from the failed batch is visible.
    assert_eq!(queries::count_entries(&store).unwrap(), 0);
}

#[test]
fn test_upsert_many_commits_whole_batch() {
    let db_path = setup_test_db("batch_commit");
    let mut store = open_store(&db_path);

    let batch: Vec<_> = (1..=4)
        .map(|i| {
            entry_at(
                i,
                &format!("2025-06-0{}T10:00:00Z", i),
                EntryType::Lucky,
                1,
                "Work",
            )
        })
        .collect();

    assert_eq!(queries::upsert_many(&mut store, &batch).unwrap(), 4);
    assert_eq!(queries::count_entries(&store).unwrap(), 4);
}

#[test]
fn test_opening_an_old_schema_upgrades_in_place() {
    let db_path = setup_test_db("old_schema");

    // Simulate a database written by an older release: no date index,
    // no note column, one existing row.
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE entries (
                id           INTEGER PRIMARY KEY,
                date         TEXT NOT NULL,
                kind         TEXT NOT NULL,
                score        INTEGER NOT NULL,
                actual_value INTEGER NOT NULL,
                category     TEXT NOT NULL
            );
            INSERT INTO entries (id, date, kind, score, actual_value, category)
            VALUES (42, '2024-12-31T10:00:00.000Z', 'lucky', 5, 5, 'Work');",
        )
        .unwrap();
    }

    let store = open_store(&db_path);

    // Existing data survived and the record reads back whole.
    let all = queries::get_all_entries(&store).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, 42);
    assert_eq!(all[0].note, "");

    // The secondary index now exists.
    let idx: i64 = store
        .conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name='idx_entries_date'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(idx, 1);

    // Re-opening (migrations already applied) is harmless.
    drop(store);
    let store = open_store(&db_path);
    assert_eq!(queries::count_entries(&store).unwrap(), 1);
}
