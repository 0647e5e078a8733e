use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use super::Bounds;
use super::dates::{MonthCursor, WeekdayPosition};

/// Monthly pattern on the anchor's day-of-month. Months without that day are skipped.
pub(super) fn by_day_of_month(bounds: &Bounds) -> Vec<NaiveDateTime> {
    let day = bounds.anchor.day();
    collect(bounds, |month| month.day(day))
}

/// Monthly pattern on the anchor's weekday position, fixed once from the anchor.
pub(super) fn by_weekday(bounds: &Bounds) -> Vec<NaiveDateTime> {
    let position = WeekdayPosition::of(bounds.anchor.date());
    collect(bounds, |month| position.resolve(month))
}

fn collect(
    bounds: &Bounds,
    day_in: impl Fn(MonthCursor) -> Option<NaiveDate>,
) -> Vec<NaiveDateTime> {
    let first = MonthCursor::containing(bounds.first_day());

    std::iter::successors(Some(first), |month| month.next())
        .take_while(|month| {
            let start = month.first_day();
            start <= bounds.ends_on && start.and_time(NaiveTime::MIN) <= bounds.range_end
        })
        .filter_map(day_in)
        .map(|day| bounds.at_anchor_time(day))
        .filter(|occurrence| bounds.admits(*occurrence))
        .collect()
}
