//! Typed event model.
//!
//! An [`Event`] is the expander's view of a content-store event: an anchor
//! timestamp, a [`Schedule`] and an opaque payload carried through untouched.
//! All timestamps are local wall-clock values.

mod record;
mod timestamp;

pub use record::{EventDetails, EventRecord, RecurrenceRecord, decode_events};
pub use timestamp::parse_timestamp;

use chrono::{NaiveDate, NaiveDateTime};

/// How a recurring event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceRule {
    /// Every week on the anchor's weekday.
    Weekly,
    /// Every month on the anchor's day-of-month. Months that are too short are skipped.
    MonthlyByDayOfMonth,
    /// Every month on the anchor's "Nth weekday" position, or on the last such
    /// weekday when the anchor is the last one of its month.
    MonthlyByWeekday,
}

impl RecurrenceRule {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::MonthlyByDayOfMonth => "monthly/dayOfMonth",
            Self::MonthlyByWeekday => "monthly/dayOfWeek",
        }
    }
}

impl std::fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When an event happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// A single occurrence on the anchor date.
    Once,
    /// A repeating pattern derived from the anchor.
    Recurring {
        rule: RecurrenceRule,
        /// Last calendar date the pattern may produce an occurrence on.
        ends_on: Option<NaiveDate>,
    },
    /// Flagged recurring, but the recurrence descriptor could not be resolved
    /// to a rule. Produces nothing.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event<P> {
    /// Occurrence date for single events, pattern reference for recurring ones.
    pub anchor: Option<NaiveDateTime>,
    pub schedule: Schedule,
    pub payload: P,
}

impl<P> Event<P> {
    /// Creates a single-occurrence event.
    #[must_use]
    pub const fn once(date: NaiveDateTime, payload: P) -> Self {
        Self {
            anchor: Some(date),
            schedule: Schedule::Once,
            payload,
        }
    }

    /// Creates a recurring event anchored at `anchor`.
    #[must_use]
    pub const fn recurring(
        anchor: NaiveDateTime,
        rule: RecurrenceRule,
        ends_on: Option<NaiveDate>,
        payload: P,
    ) -> Self {
        Self {
            anchor: Some(anchor),
            schedule: Schedule::Recurring { rule, ends_on },
            payload,
        }
    }
}
