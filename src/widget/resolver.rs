//! Pure resolution of a goal record into a display state
//!
//! Everything here is a total function of its arguments: the caller supplies
//! the reference instant (with its time zone riding along inside the
//! `DateTime`), so the same inputs always produce the same output.

use chrono::{DateTime, LocalResult, NaiveTime, Offset, TimeZone};

use crate::state::{DisplayState, GoalRecord, RemainingTime};

/// Compute the whole hours and minutes from `reference` until the start of
/// the next calendar day in `reference`'s zone.
///
/// An instant exactly on a day boundary belongs to the day it terminates, so
/// its remaining time is zero. Any clock anomaly that would make the delta
/// negative clamps to zero as well.
pub fn remaining_until_midnight<Tz: TimeZone>(reference: &DateTime<Tz>) -> RemainingTime {
    if reference.time() == NaiveTime::MIN {
        return RemainingTime::ZERO;
    }

    match next_local_midnight(reference) {
        Some(midnight) => {
            RemainingTime::from_duration(midnight.signed_duration_since(reference.clone()))
        }
        None => RemainingTime::ZERO,
    }
}

/// Decide what the widget should display for `record` at `reference`.
///
/// A record without a real goal name resolves to `Empty`, and so does a goal
/// whose day has run out. The store never deletes an expired record on its
/// own, so expiry has to be judged here against the current instant.
pub fn resolve<Tz: TimeZone>(record: &GoalRecord, reference: &DateTime<Tz>) -> DisplayState {
    if !record.is_set() {
        return DisplayState::Empty;
    }

    let remaining = remaining_until_midnight(reference);
    if remaining.is_zero() {
        return DisplayState::Empty;
    }

    DisplayState::active(record.goal_name.clone(), remaining)
}

/// First instant of the calendar day after `reference`'s day, in
/// `reference`'s zone.
///
/// An ambiguous local midnight (clocks rolled back across it) resolves to
/// the earlier instant; a nonexistent one (clocks jumped over it) falls back
/// to the reference's fixed offset. `None` only at the far edge of the
/// supported date range.
fn next_local_midnight<Tz: TimeZone>(reference: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let midnight = reference.date_naive().succ_opt()?.and_time(NaiveTime::MIN);
    let zone = reference.timezone();

    match zone.from_local_datetime(&midnight) {
        LocalResult::Single(instant) => Some(instant),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => reference
            .offset()
            .fix()
            .from_local_datetime(&midnight)
            .single()
            .map(|instant| instant.with_timezone(&zone)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn goal(name: &str) -> GoalRecord {
        GoalRecord::named(name)
    }

    #[test]
    fn remaining_fields_stay_in_range_across_a_day() {
        for minute in 0..(24 * 60) {
            let reference = Utc
                .with_ymd_and_hms(2024, 3, 15, minute / 60, minute % 60, 17)
                .unwrap();
            let rt = remaining_until_midnight(&reference);
            assert!(rt.hours <= 23, "hours out of range at minute {}", minute);
            assert!(rt.minutes <= 59, "minutes out of range at minute {}", minute);
        }
    }

    #[test]
    fn remaining_decreases_monotonically_within_a_day() {
        let mut previous = u32::MAX;
        for minute in 1..(24 * 60) {
            let reference = Utc
                .with_ymd_and_hms(2024, 3, 15, minute / 60, minute % 60, 0)
                .unwrap();
            let rt = remaining_until_midnight(&reference);
            let total = rt.hours * 60 + rt.minutes;
            assert!(
                total <= previous,
                "remaining grew from {} to {} at minute {}",
                previous,
                total,
                minute
            );
            previous = total;
        }
    }

    #[test]
    fn resets_just_after_crossing_midnight() {
        let reference = Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 1).unwrap();
        assert_eq!(
            remaining_until_midnight(&reference),
            RemainingTime { hours: 23, minutes: 59 }
        );
    }

    #[test]
    fn zero_exactly_at_midnight() {
        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(remaining_until_midnight(&reference), RemainingTime::ZERO);
    }

    #[test]
    fn one_minute_before_midnight() {
        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 0).unwrap();
        assert_eq!(
            remaining_until_midnight(&reference),
            RemainingTime { hours: 0, minutes: 1 }
        );
    }

    #[test]
    fn sub_minute_remainder_truncates_toward_zero() {
        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 30).unwrap();
        assert_eq!(remaining_until_midnight(&reference), RemainingTime::ZERO);
    }

    #[test]
    fn midnight_is_local_not_utc() {
        // 23:30 KST is 14:30 UTC; the countdown must target KST midnight
        let zone = FixedOffset::east_opt(9 * 3600).unwrap();
        let reference = zone.with_ymd_and_hms(2024, 6, 1, 23, 30, 0).unwrap();
        assert_eq!(
            remaining_until_midnight(&reference),
            RemainingTime { hours: 0, minutes: 30 }
        );
    }

    #[test]
    fn resolve_empty_without_flag() {
        let record = GoalRecord {
            has_goal: false,
            goal_name: "x".to_string(),
            ..GoalRecord::new()
        };
        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(resolve(&record, &reference), DisplayState::Empty);
    }

    #[test]
    fn resolve_empty_with_blank_name() {
        let record = GoalRecord {
            has_goal: true,
            ..GoalRecord::new()
        };
        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(resolve(&record, &reference), DisplayState::Empty);
    }

    #[test]
    fn resolve_empty_with_placeholder_name() {
        let record = goal(crate::state::GOAL_PLACEHOLDER);
        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(resolve(&record, &reference), DisplayState::Empty);
    }

    #[test]
    fn resolve_empty_exactly_at_midnight() {
        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(resolve(&goal("Run"), &reference), DisplayState::Empty);
    }

    #[test]
    fn resolve_active_one_minute_before_midnight() {
        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 0).unwrap();
        assert_eq!(
            resolve(&goal("Run"), &reference),
            DisplayState::Active {
                goal_name: "Run".to_string(),
                hours: 0,
                minutes: 1,
            }
        );
    }

    #[test]
    fn resolve_ignores_legacy_precomputed_fields() {
        let record = GoalRecord {
            remaining_hours: 7,
            remaining_minutes: 42,
            ..goal("Run")
        };
        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 22, 0, 0).unwrap();
        assert_eq!(
            resolve(&record, &reference),
            DisplayState::Active {
                goal_name: "Run".to_string(),
                hours: 2,
                minutes: 0,
            }
        );
    }

    #[test]
    fn resolve_is_idempotent() {
        let record = goal("Stretch");
        let reference = Utc.with_ymd_and_hms(2024, 5, 20, 8, 15, 42).unwrap();
        assert_eq!(resolve(&record, &reference), resolve(&record, &reference));
    }
}
