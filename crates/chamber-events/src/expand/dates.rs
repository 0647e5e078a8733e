//! Calendar arithmetic shared by the recurrence patterns and display ranges.
//!
//! Everything here returns `Option` and yields `None` both for dates that do
//! not exist (February 30th, a fifth Monday) and for chrono's range limits.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct MonthCursor(NaiveDate);

impl MonthCursor {
    pub(crate) fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    pub(crate) fn containing(date: NaiveDate) -> Self {
        // Day 1 exists in every month chrono can represent.
        Self(date - Days::new(u64::from(date.day0())))
    }

    pub(crate) const fn first_day(self) -> NaiveDate {
        self.0
    }

    pub(crate) fn next(self) -> Option<Self> {
        self.0.checked_add_months(Months::new(1)).map(Self)
    }

    pub(crate) fn last_day(self) -> Option<NaiveDate> {
        match self.next() {
            Some(next) => next.0.pred_opt(),
            None => Some(NaiveDate::MAX),
        }
    }

    /// The given day-of-month, if this month has it.
    pub(crate) fn day(self, day: u32) -> Option<NaiveDate> {
        self.0.with_day(day)
    }

    /// The `ordinal`-th (1-based) `weekday` of this month.
    pub(crate) fn nth_weekday(self, weekday: Weekday, ordinal: u32) -> Option<NaiveDate> {
        let first = first_on_or_after(self.0, weekday)?;
        let candidate = first.checked_add_days(Days::new(7 * u64::from(ordinal.checked_sub(1)?)))?;
        (candidate.month() == self.0.month()).then_some(candidate)
    }

    /// The last `weekday` of this month.
    pub(crate) fn last_weekday(self, weekday: Weekday) -> Option<NaiveDate> {
        std::iter::successors(self.last_day(), |day| day.pred_opt())
            .take(7)
            .find(|day| day.weekday() == weekday)
    }
}

/// First date on or after `from` that falls on `weekday`.
pub(crate) fn first_on_or_after(from: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    std::iter::successors(Some(from), |day| day.succ_opt())
        .take(7)
        .find(|day| day.weekday() == weekday)
}

/// Where a date sits among the same weekdays of its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WeekdayPosition {
    /// The `ordinal`-th such weekday, and not the last one.
    Nth { weekday: Weekday, ordinal: u32 },
    /// The last such weekday of the month.
    Last(Weekday),
}

impl WeekdayPosition {
    pub(crate) fn of(date: NaiveDate) -> Self {
        let weekday = date.weekday();
        let is_last = date
            .checked_add_days(Days::new(7))
            .is_none_or(|next| next.month() != date.month());

        if is_last {
            Self::Last(weekday)
        } else {
            Self::Nth {
                weekday,
                ordinal: date.day0() / 7 + 1,
            }
        }
    }

    pub(crate) fn resolve(self, month: MonthCursor) -> Option<NaiveDate> {
        match self {
            Self::Nth { weekday, ordinal } => month.nth_weekday(weekday, ordinal),
            Self::Last(weekday) => month.last_weekday(weekday),
        }
    }
}
