//! Precomputed refresh schedules for timeline-style widget hosts
//!
//! Some hosts throttle how often the widget may be woken to recompute its
//! own display, and instead accept a batch of future display states to show
//! at future instants. `build_refresh_schedule` produces that batch: one
//! entry per minute over a configured horizon, each resolved independently.

use chrono::{DateTime, Duration, TimeZone};
use serde::Serialize;

use crate::state::{DisplayState, GoalRecord};
use crate::widget::resolver::resolve;

/// One future display state and the instant it becomes current
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "DateTime<Tz>: Serialize"))]
pub struct TimelineEntry<Tz: TimeZone> {
    pub at: DateTime<Tz>,
    pub state: DisplayState,
}

/// Lazy, finite schedule of per-minute display states.
///
/// Each schedule is self-contained: building one has no side effects, and
/// building it twice from the same inputs yields the same entries.
#[derive(Debug, Clone)]
pub struct RefreshSchedule<Tz: TimeZone> {
    record: GoalRecord,
    start: DateTime<Tz>,
    horizon_minutes: u32,
    cursor: u32,
}

impl<Tz: TimeZone> Iterator for RefreshSchedule<Tz> {
    type Item = TimelineEntry<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.horizon_minutes {
            return None;
        }
        let at = self
            .start
            .clone()
            .checked_add_signed(Duration::minutes(i64::from(self.cursor)))?;
        self.cursor += 1;

        let state = resolve(&self.record, &at);
        Some(TimelineEntry { at, state })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.horizon_minutes - self.cursor) as usize;
        (left, Some(left))
    }
}

/// Build the per-minute schedule covering `reference` up to but excluding
/// `reference + horizon_minutes`, ascending.
pub fn build_refresh_schedule<Tz: TimeZone>(
    record: &GoalRecord,
    reference: &DateTime<Tz>,
    horizon_minutes: u32,
) -> RefreshSchedule<Tz> {
    RefreshSchedule {
        record: record.clone(),
        start: reference.clone(),
        horizon_minutes,
        cursor: 0,
    }
}

/// Instant at which the host should request a fresh schedule once this one
/// is exhausted.
pub fn next_reload<Tz: TimeZone>(reference: &DateTime<Tz>, horizon_minutes: u32) -> DateTime<Tz> {
    reference.clone() + Duration::minutes(i64::from(horizon_minutes))
}
