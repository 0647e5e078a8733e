use thiserror::Error;

/// Application-level errors (command-line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    EventsError(#[from] chamber_events::error::EventsError),

    #[error(transparent)]
    CoreError(#[from] chamber_core::error::CoreError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Usage: {0}")]
    UsageError(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
