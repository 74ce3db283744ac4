//! Readout Formatting
//!
//! Converts accumulated time into the `HH:MM:SS` clock shown on the dashboard.

use std::fmt;
use std::time::Duration;

/// Accumulated time split into clock fields.
///
/// Fields are truncated, never rounded: 59.999 seconds still reads `00:00:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Hms {
    /// Split a millisecond count into hours, minutes and seconds
    pub fn from_millis(ms: u64) -> Self {
        Self::from_secs(ms / 1000)
    }

    pub fn from_duration(elapsed: Duration) -> Self {
        Self::from_secs(elapsed.as_secs())
    }

    fn from_secs(total_seconds: u64) -> Self {
        Self {
            hours: total_seconds / 3600,
            minutes: (total_seconds % 3600) / 60,
            seconds: total_seconds % 60,
        }
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Format a millisecond count as `HH:MM:SS`
pub fn format_hms(ms: u64) -> String {
    Hms::from_millis(ms).to_string()
}

/// Format a whole-minute total the way the "Today" panel does (`1h 20m`, `45m`)
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
