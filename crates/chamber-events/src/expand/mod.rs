//! Recurring event expansion.
//!
//! [`expand`] turns a list of events into the concrete occurrences visible in
//! a display range. Recurring events are expanded from their anchor; single
//! events pass through unchanged, even when their date lies outside the range.
//!
//! Events that lack what their schedule needs (no date, or a recurring event
//! without an end date) contribute nothing. This is never an error.

pub(crate) mod dates;
mod monthly;
mod weekly;

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::{Event, RecurrenceRule, Schedule};

/// One concrete instance of an event.
#[derive(Debug, PartialEq)]
pub struct Occurrence<'a, P> {
    pub event: &'a Event<P>,
    pub date: NaiveDateTime,
    /// `true` when generated from a recurrence pattern.
    pub is_recurring_instance: bool,
}

impl<P> Clone for Occurrence<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Occurrence<'_, P> {}

/// Limits shared by every pattern while expanding one recurring event.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    anchor: NaiveDateTime,
    /// Inclusive last date of the recurrence.
    ends_on: NaiveDate,
    range_start: NaiveDateTime,
    range_end: NaiveDateTime,
}

impl Bounds {
    /// Day iteration begins on: the later of range start and anchor.
    fn first_day(&self) -> NaiveDate {
        self.range_start.max(self.anchor).date()
    }

    fn at_anchor_time(&self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(self.anchor.time())
    }

    fn admits(&self, occurrence: NaiveDateTime) -> bool {
        occurrence >= self.anchor
            && occurrence.date() <= self.ends_on
            && occurrence >= self.range_start
            && occurrence <= self.range_end
    }
}

/// ## Summary
/// Expands `events` into the occurrences for the inclusive window
/// `[range_start, range_end]`, sorted by date.
///
/// Recurring occurrences always fall inside the window. Single events are
/// emitted once on their own date regardless of the window. Ties keep input
/// order.
#[must_use]
pub fn expand<P>(
    events: &[Event<P>],
    range_start: NaiveDateTime,
    range_end: NaiveDateTime,
) -> Vec<Occurrence<'_, P>> {
    let mut occurrences = Vec::new();

    for event in events {
        match event.schedule {
            Schedule::Once => {
                let Some(date) = event.anchor else {
                    tracing::trace!("Skipping single event without a date");
                    continue;
                };
                occurrences.push(Occurrence {
                    event,
                    date,
                    is_recurring_instance: false,
                });
            }
            Schedule::Recurring { rule, ends_on } => {
                let (Some(anchor), Some(ends_on)) = (event.anchor, ends_on) else {
                    tracing::trace!(%rule, "Skipping recurring event without date or end date");
                    continue;
                };
                let bounds = Bounds {
                    anchor,
                    ends_on,
                    range_start,
                    range_end,
                };
                let dates = match rule {
                    RecurrenceRule::Weekly => weekly::occurrences(&bounds),
                    RecurrenceRule::MonthlyByDayOfMonth => monthly::by_day_of_month(&bounds),
                    RecurrenceRule::MonthlyByWeekday => monthly::by_weekday(&bounds),
                };
                occurrences.extend(dates.into_iter().map(|date| Occurrence {
                    event,
                    date,
                    is_recurring_instance: true,
                }));
            }
            Schedule::Unresolved => {
                tracing::trace!("Skipping event with unresolved recurrence");
            }
        }
    }

    occurrences.sort_by_key(|occurrence| occurrence.date);

    tracing::debug!(
        events = events.len(),
        occurrences = occurrences.len(),
        %range_start,
        %range_end,
        "Expanded events"
    );

    occurrences
}
