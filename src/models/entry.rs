use super::entry_type::EntryType;
use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Category label used when the user does not pick one.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One journaled luck event. Field names follow the JSON export format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,               // ⇔ entries.id (epoch millis at creation)
    pub date: DateTime<Utc>,   // ⇔ entries.date (TEXT, RFC 3339)
    #[serde(rename = "type")]
    pub kind: EntryType,       // ⇔ entries.kind ('lucky'|'unlucky'|'neutral')
    pub score: u8,             // ⇔ entries.score (0..=5, magnitude only)
    #[serde(rename = "actualValue")]
    pub actual_value: i64,     // ⇔ entries.actual_value (signed, derived)
    pub category: String,      // ⇔ entries.category (never empty)
    pub note: String,          // ⇔ entries.note (may be empty)
}

impl Entry {
    /// High-level constructor for entries created from the CLI.
    /// - Assigns `id` from the creation instant (epoch millis), so ids grow
    ///   with creation order even when `date` backfills an earlier moment.
    /// - Derives `actual_value` from `kind` and `score`.
    pub fn new(
        kind: EntryType,
        score: u8,
        category: String,
        note: String,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            date,
            kind,
            score,
            actual_value: kind.signed_value(score),
            category,
            note,
        }
    }

    /// RFC 3339 with fixed millisecond precision and `Z` suffix, the format
    /// persisted in the `date` column. Lexicographic order on these strings
    /// equals chronological order, which the date index relies on.
    pub fn date_str(&self) -> String {
        self.date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Calendar day of this entry in the user's timezone.
    pub fn local_date(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }

    /// Magnitude for display: "+3", "-2", or the bare score for neutral.
    pub fn signed_score(&self) -> String {
        match self.kind {
            EntryType::Lucky => format!("+{}", self.score),
            EntryType::Unlucky => format!("-{}", self.score),
            EntryType::Neutral => self.score.to_string(),
        }
    }
}
