//! Turns a command-line [`Selection`] into the window to expand.

use chamber_core::config::CalendarConfig;
use chamber_events::calendar::DisplayRange;
use chamber_events::event::parse_timestamp;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use crate::cli::Selection;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Range(DisplayRange),
    Upcoming {
        from: NaiveDateTime,
        horizon_days: u32,
        limit: usize,
    },
}

/// ## Summary
/// Resolves `selection` against the calendar settings, with `now` as the
/// site-local current time.
///
/// A bare date as the end of an explicit range covers that whole day.
///
/// ## Errors
/// Returns `AppError::UsageError` for unparseable timestamps and an events
/// error for invalid months or inverted ranges.
pub fn resolve(
    selection: &Selection,
    calendar: &CalendarConfig,
    now: NaiveDateTime,
    tz: Tz,
) -> AppResult<Window> {
    let range = match selection {
        Selection::Upcoming => {
            return Ok(Window::Upcoming {
                from: now,
                horizon_days: calendar.upcoming_horizon_days,
                limit: calendar.upcoming_limit,
            });
        }
        Selection::CurrentMonth => match calendar.default_month.as_deref() {
            Some(month) => DisplayRange::parse_month(month)?,
            None => DisplayRange::month(now.year(), now.month())?,
        },
        Selection::Month(month) => DisplayRange::parse_month(month)?,
        Selection::Between { start, end } => {
            let start = parse_timestamp(start, tz)
                .ok_or_else(|| AppError::UsageError(format!("invalid range start {start}")))?;
            let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d")
                .ok()
                .and_then(|day| day.and_hms_opt(23, 59, 59))
                .or_else(|| parse_timestamp(end, tz))
                .ok_or_else(|| AppError::UsageError(format!("invalid range end {end}")))?;
            DisplayRange::new(start, end)?
        }
    };

    Ok(Window::Range(range))
}
