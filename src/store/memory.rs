//! In-memory goal store

use std::sync::Mutex;

use tracing::warn;

use crate::state::GoalRecord;

use super::GoalStore;

/// Goal store backed by process memory instead of the shared preference
/// file. Used by tests to drive refreshes without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Mutex<GoalRecord>,
}

impl MemoryStore {
    pub fn new(record: GoalRecord) -> Self {
        Self {
            record: Mutex::new(record),
        }
    }

    /// Replace the stored record, as the main app would by rewriting the
    /// preference file
    pub fn set(&self, record: GoalRecord) {
        match self.record.lock() {
            Ok(mut guard) => *guard = record,
            Err(e) => warn!("Failed to lock memory store for write: {}", e),
        }
    }
}

impl GoalStore for MemoryStore {
    fn snapshot(&self) -> GoalRecord {
        match self.record.lock() {
            Ok(guard) => guard.clone(),
            Err(e) => {
                warn!("Failed to lock memory store, treating as empty: {}", e);
                GoalRecord::new()
            }
        }
    }
}
