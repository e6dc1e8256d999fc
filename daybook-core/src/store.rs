//! In-memory event storage.
//!
//! The store only enforces structural rules (non-empty title, sane range,
//! unique ids). Whether an event is allowed at all (past dates, overlaps) is
//! decided by `validate` before anything reaches `add`.

use std::collections::HashSet;

use tracing::debug;

use crate::error::ValidationError;
use crate::event::{Event, EventDraft, EventId};
use crate::id::{IdGenerator, UuidIds};

/// Insertion-ordered collection of events.
#[derive(Debug, Default)]
pub struct EventStore<G = UuidIds> {
    events: Vec<Event>,
    issued: HashSet<EventId>,
    ids: G,
}

impl EventStore<UuidIds> {
    pub fn new() -> Self {
        Self::with_ids(UuidIds)
    }
}

impl<G: IdGenerator> EventStore<G> {
    pub fn with_ids(ids: G) -> Self {
        EventStore {
            events: Vec::new(),
            issued: HashSet::new(),
            ids,
        }
    }

    /// Store a new event and return it with its freshly assigned id.
    pub fn add(&mut self, draft: EventDraft) -> Result<Event, ValidationError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if draft.start >= draft.end {
            return Err(ValidationError::EndNotAfterStart);
        }
        if draft.start.date() != draft.end.date() {
            return Err(ValidationError::SpansMultipleDays);
        }

        let id = self.ids.next_id();
        if self.issued.contains(&id) {
            return Err(ValidationError::DuplicateId(id));
        }
        self.issued.insert(id.clone());

        let event = Event {
            id,
            title: title.to_string(),
            start: draft.start,
            end: draft.end,
        };
        debug!(id = %event.id, title = %event.title, start = %event.start, end = %event.end, "event added");

        self.events.push(event.clone());
        Ok(event)
    }

    /// Remove the event with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|e| &e.id != id);
        let removed = self.events.len() != before;

        if removed {
            debug!(%id, "event removed");
        } else {
            debug!(%id, "no event to remove");
        }
        removed
    }

    /// Owned snapshot of all events in insertion order.
    pub fn list(&self) -> Vec<Event> {
        self.events.clone()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
