//! State management module
//!
//! This module contains the data model read from the shared store, the
//! values derived from it, and the host-side application state.

pub mod app_state;
pub mod display_state;
pub mod goal_record;
pub mod remaining_time;

// Re-export main types
pub use app_state::AppState;
pub use display_state::DisplayState;
pub use goal_record::{GoalRecord, GOAL_PLACEHOLDER};
pub use remaining_time::RemainingTime;
