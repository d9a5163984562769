//! Text rendering of the widget display
//!
//! Stand-in for the platform rendering collaborator: turns a `DisplayState`
//! into the small text card the host prints, and a refresh schedule into an
//! inspectable table.

use std::fmt;

use chrono::TimeZone;

use crate::state::{DisplayState, GOAL_PLACEHOLDER};
use crate::widget::TimelineEntry;

/// URL scheme a tap on the widget opens the main app with
pub const DEEP_LINK: &str = "onetoday://";

/// Render the widget card for one display state
pub fn render(state: &DisplayState) -> String {
    match state {
        DisplayState::Active {
            goal_name,
            hours,
            minutes,
        } => format!(
            "Today's goal\n  {}\n  {}h {}m until midnight\n  open {}",
            goal_name, hours, minutes, DEEP_LINK
        ),
        DisplayState::Empty => format!("{}\n  open {}", GOAL_PLACEHOLDER, DEEP_LINK),
    }
}

/// Render a refresh schedule as one line per entry
pub fn render_schedule<Tz: TimeZone>(entries: &[TimelineEntry<Tz>]) -> String
where
    Tz::Offset: fmt::Display,
{
    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        let what = match &entry.state {
            DisplayState::Active {
                goal_name,
                hours,
                minutes,
            } => format!("{}  {}h {}m", goal_name, hours, minutes),
            DisplayState::Empty => "-".to_string(),
        };
        lines.push(format!("{}  {}", entry.at.format("%H:%M"), what));
    }
    lines.join("\n")
}

/// Serialize a display state for machine consumers
pub fn to_json(state: &DisplayState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GoalRecord, RemainingTime};
    use crate::widget::build_refresh_schedule;
    use chrono::{TimeZone as _, Utc};

    #[test]
    fn active_card_shows_goal_and_countdown() {
        let card = render(&DisplayState::active(
            "Run 5k",
            RemainingTime { hours: 0, minutes: 1 },
        ));
        assert!(card.contains("Run 5k"));
        assert!(card.contains("0h 1m until midnight"));
        assert!(card.contains(DEEP_LINK));
    }

    #[test]
    fn empty_card_prompts_for_a_goal() {
        let card = render(&DisplayState::Empty);
        assert!(card.contains(GOAL_PLACEHOLDER));
        assert!(card.contains(DEEP_LINK));
    }

    #[test]
    fn schedule_renders_one_line_per_entry() {
        let record = GoalRecord::named("Read");
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let entries: Vec<_> = build_refresh_schedule(&record, &start, 3).collect();

        let table = render_schedule(&entries);
        assert_eq!(table.lines().count(), 3);
        assert!(table.starts_with("09:00  Read"));
    }

    #[test]
    fn json_output_round_trips() {
        let state = DisplayState::active("Read", RemainingTime { hours: 2, minutes: 30 });
        let json = to_json(&state).unwrap();
        let back: DisplayState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
