//! Plain-text table rendering for `list` output.

use crate::models::entry::Entry;
use crate::models::entry_type::EntryType;
use crate::utils::colors::{BOLD, GREEN, GREY, RED, RESET};

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let cut: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn score_color(kind: EntryType) -> &'static str {
    match kind {
        EntryType::Lucky => GREEN,
        EntryType::Unlucky => RED,
        EntryType::Neutral => GREY,
    }
}

pub fn render_entries(entries: &[Entry]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{BOLD}{:<14} {:<16} {:<8} {:>5}  {:<14} {}{RESET}\n",
        "ID", "DATE", "TYPE", "SCORE", "CATEGORY", "NOTE"
    ));

    for e in entries {
        let local = e.date.with_timezone(&chrono::Local);
        out.push_str(&format!(
            "{:<14} {:<16} {:<8} {}{:>5}{RESET}  {:<14} {}\n",
            e.id,
            local.format("%Y-%m-%d %H:%M").to_string(),
            e.kind.to_db_str(),
            score_color(e.kind),
            e.signed_score(),
            truncate(&e.category, 14),
            truncate(&e.note, 32),
        ));
    }

    out
}
