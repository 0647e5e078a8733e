use std::io::Write;

use chamber_core::config::CalendarConfig;
use chamber_events::calendar::{expand_range, upcoming};
use chamber_events::event::decode_events;
use chrono::NaiveDateTime;
use chrono_tz::Tz;

use crate::cli::{Invocation, OutputFormat};
use crate::error::AppResult;
use crate::render::{write_json, write_text};
use crate::selection::{Window, resolve};

/// ## Summary
/// Loads the invocation's events file and writes the selected occurrences.
///
/// ## Errors
/// Returns an error if the time zone setting is invalid, the file cannot be
/// read or decoded, the selection is invalid, or output fails.
pub fn run(
    invocation: &Invocation,
    calendar: &CalendarConfig,
    now: NaiveDateTime,
    out: &mut impl Write,
) -> AppResult<()> {
    let tz = calendar.tz()?;

    tracing::info!(path = %invocation.events_path.display(), "Loading events");
    let json = std::fs::read_to_string(&invocation.events_path)?;

    render_events(&json, invocation, calendar, tz, now, out)
}

/// ## Summary
/// Decodes an events export and writes the occurrences the invocation selects.
///
/// ## Errors
/// Returns an error if the export is not valid JSON, the selection is
/// invalid, or output fails.
pub fn render_events(
    json: &str,
    invocation: &Invocation,
    calendar: &CalendarConfig,
    tz: Tz,
    now: NaiveDateTime,
    out: &mut impl Write,
) -> AppResult<()> {
    let events = decode_events(json, tz)?;
    let window = resolve(&invocation.selection, calendar, now, tz)?;

    let occurrences = match window {
        Window::Range(range) => {
            tracing::debug!(start = %range.start(), end = %range.end(), "Expanding display range");
            let mut occurrences = expand_range(&events, &range);
            // Single events pass through expansion unfiltered; a listing only shows its window.
            occurrences.retain(|occurrence| range.contains(occurrence.date));
            occurrences
        }
        Window::Upcoming {
            from,
            horizon_days,
            limit,
        } => {
            tracing::debug!(%from, horizon_days, limit, "Listing upcoming events");
            upcoming(&events, from, horizon_days, limit)
        }
    };

    tracing::info!(
        events = events.len(),
        occurrences = occurrences.len(),
        "Rendering occurrences"
    );

    match invocation.format {
        OutputFormat::Text => write_text(out, &occurrences, &calendar.locale),
        OutputFormat::Json => write_json(out, &occurrences, &calendar.locale),
    }
}
