// =============================================================================
// Shared types used across the ticker watcher
// =============================================================================

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single observation: close price at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Milliseconds since the UNIX epoch.
    pub timestamp_ms: i64,
    /// Close price, never negative.
    pub close: f64,
}

impl PricePoint {
    pub fn new(timestamp_ms: i64, close: f64) -> Self {
        Self { timestamp_ms, close }
    }

    /// Timestamp rendered in the local time zone, if representable.
    pub fn local_time(&self) -> Option<DateTime<Local>> {
        DateTime::from_timestamp_millis(self.timestamp_ms).map(|utc| utc.with_timezone(&Local))
    }
}

/// Short-vs-long moving average classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Uptrend,
    Downtrend,
    Sideways,
    InsufficientData,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uptrend => write!(f, "Uptrend"),
            Self::Downtrend => write!(f, "Downtrend"),
            Self::Sideways => write!(f, "Sideways"),
            Self::InsufficientData => write!(f, "Insufficient data"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_labels() {
        assert_eq!(Trend::Uptrend.to_string(), "Uptrend");
        assert_eq!(Trend::Downtrend.to_string(), "Downtrend");
        assert_eq!(Trend::Sideways.to_string(), "Sideways");
        assert_eq!(Trend::InsufficientData.to_string(), "Insufficient data");
    }

    #[test]
    fn local_time_roundtrips_millis() {
        let p = PricePoint::new(1_700_000_000_000, 10.0);
        let t = p.local_time().unwrap();
        assert_eq!(t.timestamp_millis(), 1_700_000_000_000);
    }
}
