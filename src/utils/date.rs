use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};

/// First day of the calendar-grid week, from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekStart {
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn from_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "monday" => WeekStart::Monday,
            _ => WeekStart::Sunday,
        }
    }

    pub fn labels(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
            WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        }
    }
}

pub fn today() -> DateTime<Local> {
    Local::now()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // the day before the 1st of the next month
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
        .day()
}

/// Weekday index of day 1 relative to `week_start` (0 = first column).
/// This is the number of padding cells the calendar grid needs.
pub fn first_weekday_index(year: i32, month: u32, week_start: WeekStart) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    match week_start {
        WeekStart::Sunday => first.weekday().num_days_from_sunday(),
        WeekStart::Monday => first.weekday().num_days_from_monday(),
    }
}

/// Calendar month immediately before `(year, month)`; January wraps to
/// December of the previous year.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Parse "YYYY-MM".
pub fn parse_year_month(s: &str) -> AppResult<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;
    Ok((d.year(), d.month()))
}

/// Parse a user-supplied entry timestamp: RFC 3339 first, then a bare
/// YYYY-MM-DD, which lands at local noon so it stays inside the intended
/// calendar day in the user's timezone.
pub fn parse_when(s: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Ok(d.with_timezone(&Utc));
    }

    let day =
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))?;
    let noon = day.and_hms_opt(12, 0, 0).unwrap();
    Local
        .from_local_datetime(&noon)
        .earliest()
        .map(|d| d.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Resolve a period expression to a span of local calendar days:
/// - `YYYY`        → the whole year
/// - `YYYY-MM`     → the whole month
/// - `YYYY-MM-DD`  → a single day
/// - `start:end`   → from the start of the first period to the end of the
///   second (both sides any of the forms above)
fn period_days(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (s, _) = period_days(start_raw.trim())?;
        let (_, e) = period_days(end_raw.trim())?;
        if s > e {
            return Err(AppError::InvalidPeriod(p.to_string()));
        }
        return Ok((s, e));
    }

    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    if let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d") {
        let last_day = days_in_month(first.year(), first.month());
        let last = NaiveDate::from_ymd_opt(first.year(), first.month(), last_day).unwrap();
        return Ok((first, last));
    }

    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Ok((
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
        ));
    }

    Err(AppError::InvalidPeriod(p.to_string()))
}

/// Inclusive UTC timestamp bounds covering a period's full local-time span.
pub fn period_bounds(p: &str) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
    let (d1, d2) = period_days(p)?;

    let start = Local
        .from_local_datetime(&d1.and_hms_opt(0, 0, 0).unwrap())
        .earliest()
        .ok_or_else(|| AppError::InvalidDate(d1.to_string()))?;
    let end = Local
        .from_local_datetime(&d2.and_hms_milli_opt(23, 59, 59, 999).unwrap())
        .latest()
        .ok_or_else(|| AppError::InvalidDate(d2.to_string()))?;

    Ok((start.with_timezone(&Utc), end.with_timezone(&Utc)))
}
