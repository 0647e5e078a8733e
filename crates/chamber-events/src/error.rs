use thiserror::Error;

/// Event decoding and calendar errors
///
/// Expansion itself never fails; these cover the transport and caller-input
/// faults around it.
#[derive(Error, Debug)]
pub enum EventsError {
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid event export: expected an array of records or an object with a `docs` array")]
    InvalidDocument,

    #[error("Invalid display range: {start} is after {end}")]
    InvalidRange {
        start: chrono::NaiveDateTime,
        end: chrono::NaiveDateTime,
    },

    #[error("Invalid month: {0}")]
    InvalidMonth(String),
}

pub type EventsResult<T> = std::result::Result<T, EventsError>;
