// Shared expansion cases. The including module must have `Event`,
// `RecurrenceRule` and `expand` in scope.

use chrono::{NaiveDate, NaiveDateTime};

pub struct ExpansionCase {
    pub name: &'static str,
    pub anchor: &'static str,
    /// `None` for a single event.
    pub rule: Option<RecurrenceRule>,
    pub ends_on: Option<&'static str>,
    pub range_start: &'static str,
    pub range_end: &'static str,
    pub expected: &'static [&'static str],
}

fn case_datetime(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .unwrap_or_else(|err| panic!("bad case datetime {raw}: {err}"))
}

fn case_date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("bad case date {raw}: {err}"))
}

pub fn assert_case(case: &ExpansionCase) {
    let anchor = case_datetime(case.anchor);
    let event = match case.rule {
        Some(rule) => Event::recurring(anchor, rule, case.ends_on.map(case_date), case.name),
        None => Event::once(anchor, case.name),
    };
    let events = [event];

    let occurrences = expand(
        &events,
        case_datetime(case.range_start),
        case_datetime(case.range_end),
    );

    let actual: Vec<NaiveDateTime> = occurrences.iter().map(|o| o.date).collect();
    let expected: Vec<NaiveDateTime> = case.expected.iter().map(|raw| case_datetime(raw)).collect();
    assert_eq!(actual, expected, "case {}", case.name);
    assert!(
        occurrences
            .iter()
            .all(|o| o.is_recurring_instance == case.rule.is_some()),
        "case {}: recurring flag",
        case.name
    );
}

#[expect(clippy::too_many_lines)]
pub fn expansion_cases() -> Vec<ExpansionCase> {
    vec![
        ExpansionCase {
            name: "weekly_tuesdays_january",
            anchor: "2024-01-02T00:00:00",
            rule: Some(RecurrenceRule::Weekly),
            ends_on: Some("2024-01-31"),
            range_start: "2024-01-01T00:00:00",
            range_end: "2024-01-31T00:00:00",
            expected: &[
                "2024-01-02T00:00:00",
                "2024-01-09T00:00:00",
                "2024-01-16T00:00:00",
                "2024-01-23T00:00:00",
                "2024-01-30T00:00:00",
            ],
        },
        ExpansionCase {
            name: "weekly_range_starts_mid_week",
            anchor: "2024-01-03T18:30:00",
            rule: Some(RecurrenceRule::Weekly),
            ends_on: Some("2024-12-31"),
            range_start: "2024-02-10T00:00:00",
            range_end: "2024-02-29T23:59:59",
            expected: &[
                "2024-02-14T18:30:00",
                "2024-02-21T18:30:00",
                "2024-02-28T18:30:00",
            ],
        },
        ExpansionCase {
            name: "weekly_anchor_inside_range",
            anchor: "2024-03-20T09:00:00",
            rule: Some(RecurrenceRule::Weekly),
            ends_on: Some("2024-04-30"),
            range_start: "2024-03-01T00:00:00",
            range_end: "2024-03-31T23:59:59",
            expected: &["2024-03-20T09:00:00", "2024-03-27T09:00:00"],
        },
        ExpansionCase {
            name: "weekly_end_date_is_inclusive",
            anchor: "2024-01-05T12:00:00",
            rule: Some(RecurrenceRule::Weekly),
            ends_on: Some("2024-01-19"),
            range_start: "2024-01-01T00:00:00",
            range_end: "2024-01-31T23:59:59",
            expected: &[
                "2024-01-05T12:00:00",
                "2024-01-12T12:00:00",
                "2024-01-19T12:00:00",
            ],
        },
        ExpansionCase {
            name: "weekly_anchor_after_range",
            anchor: "2024-05-01T12:00:00",
            rule: Some(RecurrenceRule::Weekly),
            ends_on: Some("2024-12-31"),
            range_start: "2024-01-01T00:00:00",
            range_end: "2024-01-31T23:59:59",
            expected: &[],
        },
        ExpansionCase {
            name: "weekly_without_end_date",
            anchor: "2024-01-02T00:00:00",
            rule: Some(RecurrenceRule::Weekly),
            ends_on: None,
            range_start: "2024-01-01T00:00:00",
            range_end: "2024-01-31T23:59:59",
            expected: &[],
        },
        ExpansionCase {
            name: "weekly_ended_before_range",
            anchor: "2023-09-06T07:30:00",
            rule: Some(RecurrenceRule::Weekly),
            ends_on: Some("2023-12-20"),
            range_start: "2024-01-01T00:00:00",
            range_end: "2024-01-31T23:59:59",
            expected: &[],
        },
        ExpansionCase {
            name: "monthly_day_31_skips_short_months",
            anchor: "2024-01-31T10:00:00",
            rule: Some(RecurrenceRule::MonthlyByDayOfMonth),
            ends_on: Some("2024-12-31"),
            range_start: "2024-01-01T00:00:00",
            range_end: "2024-07-31T23:59:59",
            expected: &[
                "2024-01-31T10:00:00",
                "2024-03-31T10:00:00",
                "2024-05-31T10:00:00",
                "2024-07-31T10:00:00",
            ],
        },
        ExpansionCase {
            name: "monthly_day_29_in_non_leap_february",
            anchor: "2023-01-29T08:00:00",
            rule: Some(RecurrenceRule::MonthlyByDayOfMonth),
            ends_on: Some("2023-04-30"),
            range_start: "2023-01-01T00:00:00",
            range_end: "2023-04-30T23:59:59",
            expected: &[
                "2023-01-29T08:00:00",
                "2023-03-29T08:00:00",
                "2023-04-29T08:00:00",
            ],
        },
        ExpansionCase {
            name: "monthly_day_of_month_stops_at_end",
            anchor: "2024-01-15T19:00:00",
            rule: Some(RecurrenceRule::MonthlyByDayOfMonth),
            ends_on: Some("2024-04-15"),
            range_start: "2024-01-01T00:00:00",
            range_end: "2024-06-30T23:59:59",
            expected: &[
                "2024-01-15T19:00:00",
                "2024-02-15T19:00:00",
                "2024-03-15T19:00:00",
                "2024-04-15T19:00:00",
            ],
        },
        ExpansionCase {
            name: "monthly_second_tuesday",
            anchor: "2024-01-09T17:00:00",
            rule: Some(RecurrenceRule::MonthlyByWeekday),
            ends_on: Some("2024-06-30"),
            range_start: "2024-02-01T00:00:00",
            range_end: "2024-06-30T23:59:59",
            expected: &[
                "2024-02-13T17:00:00",
                "2024-03-12T17:00:00",
                "2024-04-09T17:00:00",
                "2024-05-14T17:00:00",
                "2024-06-11T17:00:00",
            ],
        },
        ExpansionCase {
            name: "monthly_last_friday",
            anchor: "2024-01-26T16:00:00",
            rule: Some(RecurrenceRule::MonthlyByWeekday),
            ends_on: Some("2024-06-30"),
            range_start: "2024-01-01T00:00:00",
            range_end: "2024-06-30T23:59:59",
            expected: &[
                "2024-01-26T16:00:00",
                "2024-02-23T16:00:00",
                "2024-03-29T16:00:00",
                "2024-04-26T16:00:00",
                "2024-05-31T16:00:00",
                "2024-06-28T16:00:00",
            ],
        },
        ExpansionCase {
            name: "monthly_fourth_thursday_not_last",
            anchor: "2024-02-22T12:00:00",
            rule: Some(RecurrenceRule::MonthlyByWeekday),
            ends_on: Some("2024-12-31"),
            range_start: "2024-02-01T00:00:00",
            range_end: "2024-05-31T23:59:59",
            expected: &[
                "2024-02-22T12:00:00",
                "2024-03-28T12:00:00",
                "2024-04-25T12:00:00",
                "2024-05-23T12:00:00",
            ],
        },
        ExpansionCase {
            name: "monthly_second_tuesday_range_starts_after_first_month_occurrence",
            anchor: "2024-01-09T18:00:00",
            rule: Some(RecurrenceRule::MonthlyByWeekday),
            ends_on: Some("2024-12-31"),
            range_start: "2024-01-15T00:00:00",
            range_end: "2024-03-31T23:59:59",
            expected: &["2024-02-13T18:00:00", "2024-03-12T18:00:00"],
        },
        ExpansionCase {
            name: "monthly_day_of_month_range_starts_after_first_month_occurrence",
            anchor: "2024-01-10T12:00:00",
            rule: Some(RecurrenceRule::MonthlyByDayOfMonth),
            ends_on: Some("2024-12-31"),
            range_start: "2024-01-20T00:00:00",
            range_end: "2024-03-31T23:59:59",
            expected: &["2024-02-10T12:00:00", "2024-03-10T12:00:00"],
        },
        ExpansionCase {
            name: "monthly_day_of_month_range_starts_later_same_day",
            anchor: "2024-01-10T12:00:00",
            rule: Some(RecurrenceRule::MonthlyByDayOfMonth),
            ends_on: Some("2024-12-31"),
            range_start: "2024-02-10T13:00:00",
            range_end: "2024-03-31T23:59:59",
            expected: &["2024-03-10T12:00:00"],
        },
        ExpansionCase {
            name: "single_inside_range",
            anchor: "2024-01-20T19:00:00",
            rule: None,
            ends_on: None,
            range_start: "2024-01-01T00:00:00",
            range_end: "2024-01-31T23:59:59",
            expected: &["2024-01-20T19:00:00"],
        },
        ExpansionCase {
            name: "single_outside_range_passes_through",
            anchor: "2023-06-01T18:00:00",
            rule: None,
            ends_on: None,
            range_start: "2024-01-01T00:00:00",
            range_end: "2024-01-31T23:59:59",
            expected: &["2023-06-01T18:00:00"],
        },
    ]
}
