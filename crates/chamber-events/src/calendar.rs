//! Display ranges and the listing helpers built on [`expand`].

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::{EventsError, EventsResult};
use crate::event::Event;
use crate::expand::dates::MonthCursor;
use crate::expand::{Occurrence, expand};

/// Inclusive `[start, end]` window shown by a calendar or listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DisplayRange {
    /// ## Errors
    /// Returns `EventsError::InvalidRange` if `start` is after `end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> EventsResult<Self> {
        if start > end {
            return Err(EventsError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// ## Summary
    /// The whole of a calendar month, from the first day at midnight to the
    /// last day at 23:59:59.
    ///
    /// ## Errors
    /// Returns `EventsError::InvalidMonth` if `month` is not 1-12 or the year is
    /// out of range.
    pub fn month(year: i32, month: u32) -> EventsResult<Self> {
        let invalid = || EventsError::InvalidMonth(format!("{year:04}-{month:02}"));
        let cursor = MonthCursor::new(year, month).ok_or_else(invalid)?;
        let last = cursor.last_day().ok_or_else(invalid)?;

        Ok(Self {
            start: cursor.first_day().and_time(NaiveTime::MIN),
            end: end_of_day(last).ok_or_else(invalid)?,
        })
    }

    /// ## Summary
    /// Parses a `YYYY-MM` month.
    ///
    /// ## Errors
    /// Returns `EventsError::InvalidMonth` for anything else.
    pub fn parse_month(raw: &str) -> EventsResult<Self> {
        let invalid = || EventsError::InvalidMonth(raw.to_string());
        let (year, month) = raw.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_err| invalid())?;
        let month = month.parse::<u32>().map_err(|_err| invalid())?;

        Self::month(year, month).map_err(|_err| invalid())
    }

    /// ## Summary
    /// The seven days containing `date`, beginning on `week_start`.
    ///
    /// ## Errors
    /// Returns `EventsError::InvalidRange` if the week runs off chrono's supported range.
    pub fn week_of(date: NaiveDate, week_start: Weekday) -> EventsResult<Self> {
        let offset = (date.weekday().num_days_from_monday() + 7
            - week_start.num_days_from_monday())
            % 7;
        let first = date.checked_sub_days(Days::new(u64::from(offset)));
        let last = first
            .and_then(|first| first.checked_add_days(Days::new(6)))
            .and_then(end_of_day);

        match (first, last) {
            (Some(first), Some(end)) => Ok(Self {
                start: first.and_time(NaiveTime::MIN),
                end,
            }),
            _ => {
                let at = date.and_time(NaiveTime::MIN);
                Err(EventsError::InvalidRange { start: at, end: at })
            }
        }
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDateTime) -> bool {
        self.start <= date && date <= self.end
    }
}

fn end_of_day(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_opt(23, 59, 59)
}

/// [`expand`] over a [`DisplayRange`].
#[must_use]
pub fn expand_range<'a, P>(events: &'a [Event<P>], range: &DisplayRange) -> Vec<Occurrence<'a, P>> {
    expand(events, range.start, range.end)
}

/// ## Summary
/// Buckets occurrences by calendar day for grid rendering.
///
/// Order within a day is the input order.
#[must_use]
pub fn group_by_day<'a, P>(
    occurrences: impl IntoIterator<Item = Occurrence<'a, P>>,
) -> BTreeMap<NaiveDate, Vec<Occurrence<'a, P>>> {
    let mut days: BTreeMap<NaiveDate, Vec<Occurrence<'a, P>>> = BTreeMap::new();
    for occurrence in occurrences {
        days.entry(occurrence.date.date())
            .or_default()
            .push(occurrence);
    }
    days
}

/// ## Summary
/// Occurrences for an "upcoming events" listing: everything between `from` and
/// `horizon_days` later, at most `limit` of them.
///
/// Unlike [`expand`], single events outside the window are dropped, so past
/// events never show up in a listing.
#[must_use]
pub fn upcoming<P>(
    events: &[Event<P>],
    from: NaiveDateTime,
    horizon_days: u32,
    limit: usize,
) -> Vec<Occurrence<'_, P>> {
    let until = from
        .checked_add_days(Days::new(u64::from(horizon_days)))
        .unwrap_or(NaiveDateTime::MAX);
    let window = DisplayRange {
        start: from,
        end: until,
    };

    expand_range(events, &window)
        .into_iter()
        .filter(|occurrence| window.contains(occurrence.date))
        .take(limit)
        .collect()
}
