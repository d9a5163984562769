//! Widget core module
//!
//! The pure function family behind the widget display: remaining-time
//! computation, goal-validity derivation, and refresh-schedule generation.

pub mod resolver;
pub mod timeline;

// Re-export main functions
pub use resolver::{remaining_until_midnight, resolve};
pub use timeline::{build_refresh_schedule, next_reload, RefreshSchedule, TimelineEntry};
