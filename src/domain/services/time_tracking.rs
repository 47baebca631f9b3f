use crate::domain::models::time_card::TimeCard;
use crate::error::AppError;
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

/// Reporting window for the admin per-user summary. Anything outside the
/// four known tags falls back to "everything since the epoch".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
    Other,
}

impl Period {
    pub fn parse(s: &str) -> Self {
        match s {
            "day" => Period::Day,
            "week" => Period::Week,
            "month" => Period::Month,
            "year" => Period::Year,
            _ => Period::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
            Period::Other => "other",
        }
    }
}

/// Inclusive lower bound of a reporting period relative to `now`, in UTC.
/// Weeks start on the most recent Sunday at midnight.
pub fn period_start(period: Period, now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    let date = match period {
        Period::Day => today,
        Period::Week => today - Days::new(u64::from(now.weekday().num_days_from_sunday())),
        Period::Month => today.with_day(1).unwrap_or(today),
        Period::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
        Period::Other => return DateTime::UNIX_EPOCH,
    };
    date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc()
}

/// Calendar-month window: first instant of the month through 23:59:59 of its
/// last day.
pub fn month_bounds(year: i32, month: u32) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::Validation("Invalid year/month".into()))?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| AppError::Validation("Invalid year/month".into()))?;
    let last = next_month - Days::new(1);

    let start = first.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
    let end = last.and_hms_opt(23, 59, 59).unwrap_or_default().and_utc();
    Ok((start, end))
}

/// Elapsed interval in fractional hours, unrounded.
pub fn elapsed_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 3_600_000.0
}

/// Sum of finalized hours; still-open cards contribute 0.
pub fn sum_hours(cards: &[TimeCard]) -> f64 {
    cards.iter().map(|c| c.total_hours.unwrap_or(0.0)).sum()
}
