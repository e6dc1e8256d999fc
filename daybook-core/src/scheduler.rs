//! The entry points a calendar front end calls.
//!
//! `Scheduler` owns the store together with the id and clock sources, runs
//! every new event through `validate` and only then hands it to the store.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::clock::{Clock, LocalClock};
use crate::config::DaybookConfig;
use crate::error::{DaybookError, DaybookResult};
use crate::event::{Event, EventId, EventRequest};
use crate::id::{IdGenerator, UuidIds};
use crate::slot::{SlotWindow, TimeSlot};
use crate::store::EventStore;
use crate::validate::{self, ValidationResult};

/// What happened to an add request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Accepted(Event),
    Rejected(ValidationResult),
}

impl Admission {
    /// The bare validation tag, dropping the stored event.
    pub fn result(&self) -> ValidationResult {
        match self {
            Admission::Accepted(_) => ValidationResult::Accepted,
            Admission::Rejected(result) => result.clone(),
        }
    }
}

pub struct Scheduler<G = UuidIds, C = LocalClock> {
    store: EventStore<G>,
    clock: C,
    window: SlotWindow,
}

impl Scheduler<UuidIds, LocalClock> {
    pub fn new() -> Self {
        Self::with_parts(UuidIds, LocalClock, SlotWindow::default())
    }

    pub fn from_config(config: &DaybookConfig) -> Self {
        Self::with_parts(UuidIds, LocalClock, config.slots)
    }
}

impl Default for Scheduler<UuidIds, LocalClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator, C: Clock> Scheduler<G, C> {
    pub fn with_parts(ids: G, clock: C, window: SlotWindow) -> Self {
        Scheduler {
            store: EventStore::with_ids(ids),
            clock,
            window,
        }
    }

    /// Build an event from form fields and add it if it passes validation.
    pub fn add_event(
        &mut self,
        title: &str,
        date: Option<NaiveDate>,
        start: Option<TimeSlot>,
        end: Option<TimeSlot>,
    ) -> DaybookResult<ValidationResult> {
        let request = EventRequest::new(title, date, start, end);
        Ok(self.add_request(request)?.result())
    }

    /// Like `add_event`, but hands back the stored event on success.
    pub fn add_request(&mut self, request: EventRequest) -> DaybookResult<Admission> {
        let now = self.clock.now();
        let result = validate::validate(&request, self.store.events(), now);

        if !result.is_accepted() {
            info!(title = %request.title, ?result, "event rejected");
            return Ok(Admission::Rejected(result));
        }

        let Some(draft) = request.to_draft() else {
            return Ok(Admission::Rejected(ValidationResult::RejectedIncomplete));
        };
        let event = self.store.add(draft)?;
        Ok(Admission::Accepted(event))
    }

    /// Swap an existing event for a new one built from `request`.
    ///
    /// The request is checked against every event except the one being
    /// replaced. The replacement gets a new id; on rejection nothing changes.
    pub fn replace_event(
        &mut self,
        id: &EventId,
        request: EventRequest,
    ) -> DaybookResult<Admission> {
        if self.store.get(id).is_none() {
            return Err(DaybookError::EventNotFound(id.clone()));
        }

        let now = self.clock.now();
        let others = self.store.events().iter().filter(|e| &e.id != id);
        let result = validate::validate(&request, others, now);

        if !result.is_accepted() {
            info!(%id, title = %request.title, ?result, "replacement rejected");
            return Ok(Admission::Rejected(result));
        }

        let Some(draft) = request.to_draft() else {
            return Ok(Admission::Rejected(ValidationResult::RejectedIncomplete));
        };
        // Add first so a store error leaves the old event in place.
        let event = self.store.add(draft)?;
        self.store.remove(id);
        debug!(old = %id, new = %event.id, "event replaced");
        Ok(Admission::Accepted(event))
    }

    pub fn delete_event(&mut self, id: &EventId) -> bool {
        self.store.remove(id)
    }

    pub fn list_events(&self) -> Vec<Event> {
        self.store.list()
    }

    /// Events on `date`, earliest first.
    pub fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .store
            .events()
            .iter()
            .filter(|e| e.date() == date)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.start);
        events
    }

    pub fn list_time_slots(&self) -> Vec<TimeSlot> {
        self.window.slots()
    }

    pub fn get_event(&self, id: &EventId) -> Option<Event> {
        self.store.get(id).cloned()
    }

    pub fn window(&self) -> SlotWindow {
        self.window
    }

    /// Today according to the scheduler's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.now().date()
    }
}
