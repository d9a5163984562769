//! File-backed reader for the shared preference store
//!
//! The main application keeps the widget's inputs in a flat JSON object of
//! primitive values. The widget side only ever reads it, and re-reads it on
//! every snapshot so each refresh sees the app's latest write.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::state::GoalRecord;

use super::GoalStore;

/// Store keys written by the main application
pub const KEY_HAS_GOAL: &str = "has_goal";
pub const KEY_GOAL_NAME: &str = "goal_name";
pub const KEY_REMAINING_HOURS: &str = "remaining_hours";
pub const KEY_REMAINING_MINUTES: &str = "remaining_minutes";

/// Read-only view of the preference file shared with the main application
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    /// Create a store reading from the given preference file
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying preference file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the preference file currently exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Extract a record from raw preference JSON. Each field degrades to its
    /// default independently when the key is absent or the wrong type.
    fn parse(raw: &str) -> Option<GoalRecord> {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Preference store is not valid JSON, treating as empty: {}", e);
                return None;
            }
        };

        Some(GoalRecord {
            has_goal: value.get(KEY_HAS_GOAL).and_then(Value::as_bool).unwrap_or(false),
            goal_name: value
                .get(KEY_GOAL_NAME)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            remaining_hours: value
                .get(KEY_REMAINING_HOURS)
                .and_then(Value::as_i64)
                .unwrap_or(0),
            remaining_minutes: value
                .get(KEY_REMAINING_MINUTES)
                .and_then(Value::as_i64)
                .unwrap_or(0),
        })
    }
}

impl GoalStore for PrefsStore {
    /// Read the current record. Store trouble of any kind (missing file,
    /// unreadable file, malformed content) is the empty record, never an
    /// error: unknown goal behaves as no goal.
    fn snapshot(&self) -> GoalRecord {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("Preference store {} not readable: {}", self.path.display(), e);
                return GoalRecord::new();
            }
        };

        Self::parse(&raw).unwrap_or_default()
    }
}
