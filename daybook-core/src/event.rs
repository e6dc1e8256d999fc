//! Event types.
//!
//! `EventRequest` is what a form hands in (any field may still be unset),
//! `EventDraft` is a fully specified event without an id, and `Event` is what
//! the store keeps once an id has been assigned.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::slot::TimeSlot;

/// Opaque event identifier, unique for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        EventId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        EventId::new(id)
    }
}

/// Anything occupying a half-open `[start, end)` span of local time.
pub trait Interval {
    fn start(&self) -> NaiveDateTime;
    fn end(&self) -> NaiveDateTime;
}

/// A stored calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Event {
    /// Calendar day the event takes place on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Clock range as shown on an event card, e.g. `09:00-09:30`.
    pub fn time_range(&self) -> String {
        format!("{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

impl Interval for Event {
    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// A fully specified event that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        EventDraft {
            title: title.into(),
            start,
            end,
        }
    }
}

impl Interval for EventDraft {
    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

/// Raw form input for a new event. `None` means the field was left unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRequest {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub start: Option<TimeSlot>,
    pub end: Option<TimeSlot>,
}

impl EventRequest {
    pub fn new(
        title: impl Into<String>,
        date: Option<NaiveDate>,
        start: Option<TimeSlot>,
        end: Option<TimeSlot>,
    ) -> Self {
        EventRequest {
            title: title.into(),
            date,
            start,
            end,
        }
    }

    /// True when the title is blank or any of date/start/end is unset.
    pub fn is_incomplete(&self) -> bool {
        self.title.trim().is_empty()
            || self.date.is_none()
            || self.start.is_none()
            || self.end.is_none()
    }

    /// Start instant, available once both the date and start slot are set.
    pub fn start_instant(&self) -> Option<NaiveDateTime> {
        Some(self.date?.and_time(self.start?.time()))
    }

    /// The concrete draft this request describes, or `None` if incomplete.
    pub fn to_draft(&self) -> Option<EventDraft> {
        if self.is_incomplete() {
            return None;
        }
        let date = self.date?;
        Some(EventDraft {
            title: self.title.trim().to_string(),
            start: date.and_time(self.start?.time()),
            end: date.and_time(self.end?.time()),
        })
    }
}
