//! Core types for the daybook calendar.
//!
//! This crate holds everything a calendar front end needs to call into:
//! - `EventStore` keeps the events and enforces structural rules
//! - `validate` decides whether a requested event may be admitted
//! - `Scheduler` wires the two together behind injected id and clock sources
//! - `SharedScheduler` serializes access when several callers share one store

pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod id;
pub mod scheduler;
pub mod shared;
pub mod slot;
pub mod store;
pub mod validate;

pub use clock::{Clock, FixedClock, LocalClock};
pub use config::DaybookConfig;
pub use error::{DaybookError, DaybookResult, ValidationError};
pub use event::{Event, EventDraft, EventId, EventRequest, Interval};
pub use id::{IdGenerator, SequentialIds, UuidIds};
pub use scheduler::{Admission, Scheduler};
pub use shared::SharedScheduler;
pub use slot::{SlotWindow, TimeSlot, generate_time_slots};
pub use store::EventStore;
pub use validate::ValidationResult;
