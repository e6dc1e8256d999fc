//! Error types for daybook.

use thiserror::Error;

use crate::event::EventId;

/// Structural problems with an event handed to `EventStore::add`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Event title must not be empty")]
    EmptyTitle,

    #[error("Event must end after it starts")]
    EndNotAfterStart,

    #[error("Event must start and end on the same day")]
    SpansMultipleDays,

    #[error("Event id '{0}' has already been issued")]
    DuplicateId(EventId),
}

/// Errors that can occur in daybook operations.
#[derive(Error, Debug)]
pub enum DaybookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid event: {0}")]
    Validation(#[from] ValidationError),

    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Invalid time slot '{0}'. Expected H:MM")]
    InvalidTimeSlot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for daybook operations.
pub type DaybookResult<T> = Result<T, DaybookError>;
