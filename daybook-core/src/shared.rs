//! A scheduler that can be shared between threads.
//!
//! Validation reads the store and adding writes it, so both have to happen
//! under the same lock or two callers could each pass validation against a
//! stale view and store overlapping events.

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;

use crate::clock::{Clock, LocalClock};
use crate::error::DaybookResult;
use crate::event::{Event, EventId, EventRequest};
use crate::id::{IdGenerator, UuidIds};
use crate::scheduler::{Admission, Scheduler};
use crate::slot::TimeSlot;
use crate::validate::ValidationResult;

pub struct SharedScheduler<G = UuidIds, C = LocalClock> {
    inner: Arc<Mutex<Scheduler<G, C>>>,
}

impl<G, C> Clone for SharedScheduler<G, C> {
    fn clone(&self) -> Self {
        SharedScheduler {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: IdGenerator, C: Clock> SharedScheduler<G, C> {
    pub fn new(scheduler: Scheduler<G, C>) -> Self {
        SharedScheduler {
            inner: Arc::new(Mutex::new(scheduler)),
        }
    }

    pub fn add_event(
        &self,
        title: &str,
        date: Option<NaiveDate>,
        start: Option<TimeSlot>,
        end: Option<TimeSlot>,
    ) -> DaybookResult<ValidationResult> {
        self.inner.lock().add_event(title, date, start, end)
    }

    pub fn add_request(&self, request: EventRequest) -> DaybookResult<Admission> {
        self.inner.lock().add_request(request)
    }

    pub fn replace_event(&self, id: &EventId, request: EventRequest) -> DaybookResult<Admission> {
        self.inner.lock().replace_event(id, request)
    }

    pub fn delete_event(&self, id: &EventId) -> bool {
        self.inner.lock().delete_event(id)
    }

    pub fn list_events(&self) -> Vec<Event> {
        self.inner.lock().list_events()
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        self.inner.lock().events_on(date)
    }

    pub fn list_time_slots(&self) -> Vec<TimeSlot> {
        self.inner.lock().list_time_slots()
    }

    /// Run several operations under one lock acquisition.
    pub fn with<R>(&self, f: impl FnOnce(&mut Scheduler<G, C>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
