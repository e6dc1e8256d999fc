//! Event id generation.

use uuid::Uuid;

use crate::event::EventId;

/// Source of fresh event ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> EventId;
}

/// Random v4 UUIDs. The default for real use.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> EventId {
        EventId::new(Uuid::new_v4().to_string())
    }
}

/// Predictable ids (`evt-1`, `evt-2`, ...) for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    issued: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> EventId {
        self.issued += 1;
        EventId::new(format!("evt-{}", self.issued))
    }
}
