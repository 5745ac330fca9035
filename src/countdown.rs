use chrono::{DateTime, Utc};
use serde::Serialize;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Time remaining until a target moment, broken into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_seconds: i64,
}

impl Countdown {
    /// All fields are zero once `target` is reached.
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = (target - now).num_seconds();
        if remaining <= 0 {
            return Self::default();
        }
        Self {
            days: remaining / SECONDS_PER_DAY,
            hours: remaining % SECONDS_PER_DAY / SECONDS_PER_HOUR,
            minutes: remaining % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            seconds: remaining % SECONDS_PER_MINUTE,
            total_seconds: remaining,
        }
    }

    pub fn is_elapsed(&self) -> bool {
        self.total_seconds == 0
    }
}
