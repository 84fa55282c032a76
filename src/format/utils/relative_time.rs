//! Humanized relative durations ("5 minutes", "a day") for state ages

use crate::core::RelativeTimeFormatter;
use chrono::{DateTime, Duration, Utc};

const MILLIS_PER_SECOND: f64 = 1_000.0;
const MILLIS_PER_MINUTE: f64 = 60_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;
// 400 years hold 146097 days and 4800 months
const DAYS_PER_MONTH: f64 = 146_097.0 / 4_800.0;

/// Upper bounds (inclusive for seconds, exclusive otherwise) before switching to the next unit
mod thresholds {
    pub const FEW_SECONDS: f64 = 44.0;
    pub const MINUTES: f64 = 45.0;
    pub const HOURS: f64 = 22.0;
    pub const DAYS: f64 = 26.0;
    pub const MONTHS: f64 = 11.0;
}

/// Render the magnitude of `elapsed` as a humanized duration without suffix.
pub fn humanize(elapsed: Duration) -> String {
    let millis = elapsed.num_milliseconds().unsigned_abs() as f64;

    let seconds = (millis / MILLIS_PER_SECOND).round();
    let minutes = (millis / MILLIS_PER_MINUTE).round();
    let hours = (millis / MILLIS_PER_HOUR).round();
    let days = (millis / MILLIS_PER_DAY).round();
    let months = (millis / MILLIS_PER_DAY / DAYS_PER_MONTH).round();
    let years = (millis / MILLIS_PER_DAY / DAYS_PER_MONTH / 12.0).round();

    if seconds <= thresholds::FEW_SECONDS {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < thresholds::MINUTES {
        format!("{minutes} minutes")
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < thresholds::HOURS {
        format!("{hours} hours")
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < thresholds::DAYS {
        format!("{days} days")
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < thresholds::MONTHS {
        format!("{months} months")
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}

/// Measures against the system clock at call time
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl RelativeTimeFormatter for WallClock {
    fn human_relative_duration(&self, timestamp: DateTime<Utc>) -> String {
        humanize(Utc::now() - timestamp)
    }
}

/// Measures against a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl RelativeTimeFormatter for FixedClock {
    fn human_relative_duration(&self, timestamp: DateTime<Utc>) -> String {
        humanize(self.now - timestamp)
    }
}
