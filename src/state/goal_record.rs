//! Goal record structure as read from the shared preference store

use serde::{Deserialize, Serialize};

/// Placeholder the main app writes in place of a real goal name when no goal
/// is configured. A record carrying it counts as unset.
pub const GOAL_PLACEHOLDER: &str = "Set your goal";

/// Snapshot of the goal data the main application last wrote into the shared
/// store. Every field has a documented default so an absent or partial store
/// still produces a usable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRecord {
    /// Whether the app considers a goal to be set (key `has_goal`)
    #[serde(default)]
    pub has_goal: bool,
    /// Display name of the goal (key `goal_name`)
    #[serde(default)]
    pub goal_name: String,
    /// Remaining hours precomputed by older app versions (key
    /// `remaining_hours`). Superseded by dynamic recomputation; parsed but
    /// never displayed.
    #[serde(default)]
    pub remaining_hours: i64,
    /// Remaining minutes precomputed by older app versions (key
    /// `remaining_minutes`). Superseded by dynamic recomputation.
    #[serde(default)]
    pub remaining_minutes: i64,
}

impl GoalRecord {
    /// Create an empty record (the store defaults: no goal, blank name)
    pub fn new() -> Self {
        Self {
            has_goal: false,
            goal_name: String::new(),
            remaining_hours: 0,
            remaining_minutes: 0,
        }
    }

    /// Create a record for a named goal
    pub fn named(goal_name: impl Into<String>) -> Self {
        Self {
            has_goal: true,
            goal_name: goal_name.into(),
            remaining_hours: 0,
            remaining_minutes: 0,
        }
    }

    /// Check whether this record names a real goal: the flag is set and the
    /// name is neither blank nor the placeholder sentinel
    pub fn is_set(&self) -> bool {
        self.has_goal && !self.goal_name.is_empty() && self.goal_name != GOAL_PLACEHOLDER
    }
}

impl Default for GoalRecord {
    fn default() -> Self {
        Self::new()
    }
}
