//! Display state handed to the rendering collaborator

use serde::{Deserialize, Serialize};

use super::RemainingTime;

/// What the widget should show after one evaluation. A pure value derived
/// from `(GoalRecord, reference instant)`; it is recomputed on every refresh
/// and never cached across refreshes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DisplayState {
    /// No goal to show: none set, name blank or placeholder, or the day has
    /// run out
    Empty,
    /// A live goal with its countdown to midnight
    Active {
        goal_name: String,
        hours: u32,
        minutes: u32,
    },
}

impl DisplayState {
    /// Create an active state from a goal name and its remaining time
    pub fn active(goal_name: impl Into<String>, remaining: RemainingTime) -> Self {
        Self::Active {
            goal_name: goal_name.into(),
            hours: remaining.hours,
            minutes: remaining.minutes,
        }
    }

    /// Check if there is a goal to display
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_constructor_copies_fields() {
        let state = DisplayState::active("Read", RemainingTime { hours: 3, minutes: 20 });
        assert_eq!(
            state,
            DisplayState::Active {
                goal_name: "Read".to_string(),
                hours: 3,
                minutes: 20,
            }
        );
        assert!(state.is_active());
        assert!(!DisplayState::Empty.is_active());
    }

    #[test]
    fn serializes_with_state_tag() {
        let json = serde_json::to_value(DisplayState::Empty).unwrap();
        assert_eq!(json["state"], "empty");

        let json =
            serde_json::to_value(DisplayState::active("Read", RemainingTime { hours: 1, minutes: 2 }))
                .unwrap();
        assert_eq!(json["state"], "active");
        assert_eq!(json["goal_name"], "Read");
        assert_eq!(json["hours"], 1);
        assert_eq!(json["minutes"], 2);
    }
}
