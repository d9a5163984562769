//! Shared state store module
//!
//! The preference store the main application writes is an external, opaque
//! dependency. This module models it as a read-only port so the resolver
//! stays pure and the harness can be driven from any backing.

pub mod memory;
pub mod prefs;

use crate::state::GoalRecord;

/// Read-only port onto the shared goal store.
///
/// A snapshot is total: whatever is wrong with the underlying store comes
/// back as the documented-default record, not as an error.
pub trait GoalStore: Send + Sync {
    fn snapshot(&self) -> GoalRecord;
}

// Re-export main types
pub use memory::MemoryStore;
pub use prefs::PrefsStore;
