use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Lucky,
    Unlucky,
    Neutral,
}

impl EntryType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryType::Lucky => "lucky",
            EntryType::Unlucky => "unlucky",
            EntryType::Neutral => "neutral",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "lucky" => Some(EntryType::Lucky),
            "unlucky" => Some(EntryType::Unlucky),
            "neutral" => Some(EntryType::Neutral),
            _ => None,
        }
    }

    /// Helper: convert input from CLI (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        EntryType::from_db_str(&code.to_lowercase())
    }

    /// Signed contribution of a magnitude for this type:
    /// +score for lucky, -score for unlucky, always 0 for neutral.
    pub fn signed_value(&self, score: u8) -> i64 {
        match self {
            EntryType::Lucky => score as i64,
            EntryType::Unlucky => -(score as i64),
            EntryType::Neutral => 0,
        }
    }

    /// Valid magnitude range: 1-5 for lucky/unlucky, 0-5 for neutral.
    pub fn valid_score(&self, score: u8) -> bool {
        match self {
            EntryType::Neutral => score <= 5,
            _ => (1..=5).contains(&score),
        }
    }

    pub fn is_lucky(&self) -> bool {
        matches!(self, EntryType::Lucky)
    }

    pub fn is_unlucky(&self) -> bool {
        matches!(self, EntryType::Unlucky)
    }
}
