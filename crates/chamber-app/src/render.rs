//! Output of expanded occurrences.

use std::io::Write;

use chamber_events::event::EventDetails;
use chamber_events::expand::Occurrence;
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;

/// Locale used when a bilingual field lacks the requested one.
const FALLBACK_LOCALE: &str = "en";

#[derive(Debug, Serialize)]
struct OccurrenceView<'a> {
    date: NaiveDateTime,
    recurring: bool,
    title: Option<&'a str>,
    event: &'a EventDetails,
}

/// ## Summary
/// Picks the display text of a possibly bilingual field.
///
/// Plain strings are returned as is. Localized objects (`{"en": .., "fr": ..}`)
/// yield `locale`, then English, then whichever translation is non-empty.
#[must_use]
pub fn localized<'a>(value: &'a Value, locale: &str) -> Option<&'a str> {
    match value {
        Value::String(text) => Some(text.as_str()).filter(|text| !text.is_empty()),
        Value::Object(translations) => [locale, FALLBACK_LOCALE]
            .iter()
            .find_map(|key| translations.get(*key).and_then(Value::as_str))
            .filter(|text| !text.is_empty())
            .or_else(|| {
                translations
                    .values()
                    .filter_map(Value::as_str)
                    .find(|text| !text.is_empty())
            }),
        _ => None,
    }
}

fn title<'a>(details: &'a EventDetails, locale: &str) -> Option<&'a str> {
    details.get("title").and_then(|value| localized(value, locale))
}

/// ## Summary
/// Writes one line per occurrence: date, a recurrence marker and the title.
///
/// ## Errors
/// Returns an I/O error if writing fails.
pub fn write_text(
    out: &mut impl Write,
    occurrences: &[Occurrence<'_, EventDetails>],
    locale: &str,
) -> AppResult<()> {
    for occurrence in occurrences {
        let marker = if occurrence.is_recurring_instance {
            "recurring"
        } else {
            "single"
        };
        let title = title(&occurrence.event.payload, locale).unwrap_or("(untitled)");
        writeln!(
            out,
            "{}  {marker:<9}  {title}",
            occurrence.date.format("%Y-%m-%d %H:%M")
        )?;
    }
    Ok(())
}

/// ## Summary
/// Writes the occurrences as a pretty-printed JSON array.
///
/// ## Errors
/// Returns an error if serialization or writing fails.
pub fn write_json(
    out: &mut impl Write,
    occurrences: &[Occurrence<'_, EventDetails>],
    locale: &str,
) -> AppResult<()> {
    let views: Vec<OccurrenceView<'_>> = occurrences
        .iter()
        .map(|occurrence| OccurrenceView {
            date: occurrence.date,
            recurring: occurrence.is_recurring_instance,
            title: title(&occurrence.event.payload, locale),
            event: &occurrence.event.payload,
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &views)?;
    writeln!(out)?;
    Ok(())
}
