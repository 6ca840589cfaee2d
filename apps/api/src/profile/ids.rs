use std::str::FromStr;

use chrono::Utc;

use crate::models::entries::EntryId;

/// Source of fresh entry ids for one section store.
///
/// Implementations must hand out strictly increasing ids, and never return an
/// id at or below anything passed to `observe`.
pub trait IdGenerator: Send + Sync {
    fn next_id(&mut self) -> EntryId;

    /// Records an id that entered the store from outside (import).
    fn observe(&mut self, id: EntryId);
}

/// 1, 2, 3, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> EntryId {
        self.last = self.last.saturating_add(1);
        EntryId(self.last)
    }

    fn observe(&mut self, id: EntryId) {
        self.last = self.last.max(id.0);
    }
}

/// Epoch-millisecond ids, bumped past the previous id when two are requested
/// within the same millisecond.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: u64,
}

impl TimestampIds {
    fn next_after(&mut self, now_ms: u64) -> EntryId {
        self.last = now_ms.max(self.last.saturating_add(1));
        EntryId(self.last)
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> EntryId {
        let now_ms = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_after(now_ms)
    }

    fn observe(&mut self, id: EntryId) {
        self.last = self.last.max(id.0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Timestamp,
    Sequential,
}

impl IdStrategy {
    pub fn generator(&self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Timestamp => Box::new(TimestampIds::default()),
            IdStrategy::Sequential => Box::new(SequentialIds::default()),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timestamp" => Ok(IdStrategy::Timestamp),
            "sequential" => Ok(IdStrategy::Sequential),
            other => Err(anyhow::anyhow!(
                "unknown id strategy '{other}' (expected 'timestamp' or 'sequential')"
            )),
        }
    }
}
