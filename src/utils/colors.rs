//! ANSI color constants shared by CLI outputs.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const CYAN: &str = "\x1b[36m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const GREY: &str = "\x1b[90m";

// Background fills for the heatmap grid, one per color bucket.
pub const BG_STRONG_GREEN: &str = "\x1b[42;30m";
pub const BG_WEAK_GREEN: &str = "\x1b[102;30m";
pub const BG_STRONG_RED: &str = "\x1b[41;30m";
pub const BG_WEAK_RED: &str = "\x1b[101;30m";
pub const BG_ZERO: &str = "\x1b[47;30m";
