//! Decoding of event records as exported by the content store.
//!
//! Records are frequently drafts with fields missing. Decoding never rejects a
//! record for that: whatever cannot be understood is dropped and the event
//! ends up contributing fewer (or zero) occurrences.

use chrono_tz::Tz;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::{Event, RecurrenceRule, Schedule, parse_timestamp};
use crate::error::{EventsError, EventsResult};

/// Opaque display fields of a record (title, slug, location, translations, ...).
pub type EventDetails = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub recurrence_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub monthly_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_recurring: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub recurrence: Option<RecurrenceRecord>,
    #[serde(flatten)]
    pub details: EventDetails,
}

/// Reads an optional field, treating a value of the wrong type as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Option::<T>::deserialize(&value).unwrap_or_else(|e| {
        tracing::trace!(%value, error = %e, "Ignoring malformed record field");
        None
    }))
}

impl EventRecord {
    /// ## Summary
    /// Converts the record into a typed [`Event`], reading offset timestamps in `tz`.
    ///
    /// An event is recurring only when `isRecurring` is true and a recurrence
    /// type is present; anything else is a single event on `date`.
    #[must_use]
    pub fn into_event(self, tz: Tz) -> Event<EventDetails> {
        let anchor = self.date.as_deref().and_then(|raw| parse_timestamp(raw, tz));
        if anchor.is_none() {
            tracing::trace!(date = ?self.date, "Event record has no usable date");
        }

        let recurrence = self.recurrence.unwrap_or_default();
        let recurrence_type = recurrence
            .recurrence_type
            .as_deref()
            .map(str::trim)
            .filter(|kind| !kind.is_empty());

        let schedule = match (self.is_recurring.unwrap_or(false), recurrence_type) {
            (true, Some(kind)) => match resolve_rule(kind, recurrence.monthly_type.as_deref()) {
                Some(rule) => Schedule::Recurring {
                    rule,
                    ends_on: self
                        .end_date
                        .as_deref()
                        .and_then(|raw| parse_timestamp(raw, tz))
                        .map(|end| end.date()),
                },
                None => {
                    tracing::trace!(
                        recurrence_type = kind,
                        monthly_type = ?recurrence.monthly_type,
                        "Unrecognized recurrence descriptor"
                    );
                    Schedule::Unresolved
                }
            },
            _ => Schedule::Once,
        };

        Event {
            anchor,
            schedule,
            payload: self.details,
        }
    }
}

fn resolve_rule(recurrence_type: &str, monthly_type: Option<&str>) -> Option<RecurrenceRule> {
    match (recurrence_type, monthly_type.map(str::trim)) {
        ("weekly", _) => Some(RecurrenceRule::Weekly),
        ("monthly", Some("dayOfMonth")) => Some(RecurrenceRule::MonthlyByDayOfMonth),
        ("monthly", Some("dayOfWeek")) => Some(RecurrenceRule::MonthlyByWeekday),
        _ => None,
    }
}

/// ## Summary
/// Decodes a JSON export of event records into typed events.
///
/// Accepts a bare array or a paginated object with a `docs` array. Fields of
/// the wrong type are read as absent; entries that are not objects are dropped.
///
/// ## Errors
/// Returns `EventsError::Decode` if the document is not valid JSON and
/// `EventsError::InvalidDocument` if it has neither shape. Individual
/// malformed records are never an error.
pub fn decode_events(json: &str, tz: Tz) -> EventsResult<Vec<Event<EventDetails>>> {
    let records = match serde_json::from_str::<Value>(json)? {
        Value::Array(records) => records,
        Value::Object(mut page) => match page.remove("docs") {
            Some(Value::Array(records)) => records,
            _ => return Err(EventsError::InvalidDocument),
        },
        _ => return Err(EventsError::InvalidDocument),
    };

    tracing::debug!(records = records.len(), "Decoding event records");

    Ok(records
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<EventRecord>(value) {
            Ok(record) => Some(record.into_event(tz)),
            Err(e) => {
                tracing::trace!(error = %e, "Skipping event record that is not an object");
                None
            }
        })
        .collect())
}
