//! Remaining time value for the midnight countdown

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Whole hours and minutes left until the next local midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingTime {
    pub hours: u32,
    pub minutes: u32,
}

impl RemainingTime {
    /// No time left
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
    };

    /// Build from a signed duration, truncating sub-minute remainder toward
    /// zero. Negative durations clamp to zero instead of going negative.
    pub fn from_duration(delta: Duration) -> Self {
        let total_minutes = delta.num_minutes().max(0);
        Self {
            hours: (total_minutes / 60) as u32,
            minutes: (total_minutes % 60) as u32,
        }
    }

    /// Check if the countdown has reached zero
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_minutes_into_hours_and_minutes() {
        let rt = RemainingTime::from_duration(Duration::minutes(125));
        assert_eq!(rt, RemainingTime { hours: 2, minutes: 5 });
    }

    #[test]
    fn truncates_sub_minute_remainder() {
        // 61 minutes and 59 seconds is still 1h 1m
        let rt = RemainingTime::from_duration(Duration::seconds(61 * 60 + 59));
        assert_eq!(rt, RemainingTime { hours: 1, minutes: 1 });
    }

    #[test]
    fn clamps_negative_durations_to_zero() {
        let rt = RemainingTime::from_duration(Duration::minutes(-5));
        assert_eq!(rt, RemainingTime::ZERO);
        assert!(rt.is_zero());
    }

    #[test]
    fn zero_is_zero() {
        assert!(RemainingTime::ZERO.is_zero());
        assert!(RemainingTime::from_duration(Duration::seconds(59)).is_zero());
        assert!(!RemainingTime::from_duration(Duration::minutes(1)).is_zero());
    }

    #[test]
    fn formats_as_hours_and_minutes() {
        let rt = RemainingTime { hours: 0, minutes: 1 };
        assert_eq!(rt.to_string(), "0h 1m");
    }
}
