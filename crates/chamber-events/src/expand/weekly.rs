use chrono::{Datelike, Days, NaiveDateTime};

use super::Bounds;
use super::dates::first_on_or_after;

/// Weekly pattern: every anchor weekday from `max(range start, anchor)` on.
pub(super) fn occurrences(bounds: &Bounds) -> Vec<NaiveDateTime> {
    let Some(first) = first_on_or_after(bounds.first_day(), bounds.anchor.weekday()) else {
        return Vec::new();
    };

    std::iter::successors(Some(first), |day| day.checked_add_days(Days::new(7)))
        .take_while(|day| *day <= bounds.ends_on)
        .map(|day| bounds.at_anchor_time(day))
        .take_while(|occurrence| *occurrence <= bounds.range_end)
        .filter(|occurrence| bounds.admits(*occurrence))
        .collect()
}
