// =============================================================================
// Intraday response parsing
// =============================================================================
//
// Expected shape:
// ```json
// {
//   "Meta Data": { ... },
//   "Time Series (1min)": {
//     "2024-01-05 15:59:00": { "1. open": "...", "4. close": "160.70", ... },
//     ...
//   }
// }
// ```
//
// Timestamps carry no zone; they are read as local time.  Object key order is
// not trusted, the result is sorted newest first explicitly.
// =============================================================================

use chrono::{Local, NaiveDateTime, TimeZone};
use tracing::{debug, warn};

use crate::error::ParseError;
use crate::types::PricePoint;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Top-level keys the provider uses instead of data when a call is refused.
const PROVIDER_NOTICE_KEYS: &[&str] = &["Error Message", "Note", "Information"];

/// Name of the series object for a given bar interval, e.g. `"1min"`.
pub fn series_key(interval: &str) -> String {
    format!("Time Series ({interval})")
}

/// Parse an intraday response into price points ordered newest first.
pub fn parse_intraday(body: &str, interval: &str) -> Result<Vec<PricePoint>, ParseError> {
    let root: serde_json::Value = serde_json::from_str(body)?;
    let key = series_key(interval);

    let series = match root.get(&key) {
        Some(series) => series,
        None => {
            let detail = PROVIDER_NOTICE_KEYS
                .iter()
                .find_map(|k| root.get(*k).and_then(|v| v.as_str()))
                .map(str::to_string);
            warn!(key = %key, detail = ?detail, "time series missing from response");
            return Err(ParseError::MissingSeries { key, detail });
        }
    };

    let bars = series
        .as_object()
        .ok_or_else(|| ParseError::SeriesNotObject { key: key.clone() })?;

    let mut points = Vec::with_capacity(bars.len());
    for (timestamp, bar) in bars {
        let raw_close = bar["4. close"]
            .as_str()
            .ok_or_else(|| ParseError::MissingClose {
                timestamp: timestamp.clone(),
            })?;

        let close = parse_close(raw_close).ok_or_else(|| ParseError::InvalidClose {
            timestamp: timestamp.clone(),
            value: raw_close.to_string(),
        })?;

        points.push(PricePoint::new(parse_timestamp_ms(timestamp)?, close));
    }

    points.sort_by(|a, b| b.timestamp_ms.cmp(&a.timestamp_ms));

    debug!(count = points.len(), "intraday bars parsed");
    Ok(points)
}

/// Close prices must be finite and non-negative.
fn parse_close(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// `"2024-01-05 15:59:00"` in local time → epoch milliseconds.
///
/// A wall-clock time repeated by a DST change resolves to its earlier
/// instant; one skipped by a DST change is rejected.
fn parse_timestamp_ms(raw: &str) -> Result<i64, ParseError> {
    let naive = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map_err(|_| ParseError::InvalidTimestamp(raw.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| ParseError::InvalidTimestamp(raw.to_string()))
}
