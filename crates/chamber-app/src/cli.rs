//! Command-line arguments.
//!
//! ```text
//! chamber-calendar <events.json> [YYYY-MM | <start> <end>] [--upcoming] [--json]
//! ```

use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Which occurrences to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The configured default month, or the current one.
    CurrentMonth,
    /// A `YYYY-MM` month.
    Month(String),
    /// An explicit inclusive window.
    Between { start: String, end: String },
    /// The "upcoming events" listing starting now.
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub events_path: PathBuf,
    pub selection: Selection,
    pub format: OutputFormat,
}

impl Invocation {
    /// ## Summary
    /// Builds an invocation from process arguments, program name first.
    ///
    /// ## Errors
    /// Returns `AppError::UsageError` for a missing events file, unknown flags,
    /// too many arguments, or `--upcoming` combined with a range.
    pub fn build(mut args: impl Iterator<Item = String>) -> AppResult<Self> {
        args.next();

        let mut format = OutputFormat::Text;
        let mut upcoming = false;
        let mut positional = Vec::new();

        for arg in args {
            if arg == "--json" {
                format = OutputFormat::Json;
            } else if arg == "--upcoming" {
                upcoming = true;
            } else if arg.starts_with("--") {
                return Err(AppError::UsageError(format!("unknown flag {arg}")));
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        let Some(events_path) = positional.next() else {
            return Err(AppError::UsageError(
                "missing path to the events JSON file".to_string(),
            ));
        };

        let selection = match (positional.next(), positional.next(), positional.next()) {
            (None, _, _) if upcoming => Selection::Upcoming,
            (None, _, _) => Selection::CurrentMonth,
            (Some(_), _, _) if upcoming => {
                return Err(AppError::UsageError(
                    "--upcoming does not take a month or range".to_string(),
                ));
            }
            (Some(month), None, _) => Selection::Month(month),
            (Some(start), Some(end), None) => Selection::Between { start, end },
            (Some(_), Some(_), Some(extra)) => {
                return Err(AppError::UsageError(format!("unexpected argument {extra}")));
            }
        };

        Ok(Self {
            events_path: PathBuf::from(events_path),
            selection,
            format,
        })
    }
}
