// =============================================================================
// Error taxonomy
// =============================================================================
//
// Typed errors for everything a poll cycle can hit.  `anyhow` is only used at
// the process edge (main, config, prompts); inside the cycle the caller needs
// to tell a network failure from a malformed response from an empty series.

use thiserror::Error;

/// Positional access past the end of the series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("index {index} out of range for series of length {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Numerical edge cases the indicator engine refuses to paper over.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// Average loss over the window is zero, so RS = gain / loss is undefined.
    #[error("RSI({period}) undefined: no losing moves in window (avg gain {avg_gain})")]
    UndefinedRsi { period: usize, avg_gain: f64 },
}

/// Failure talking to the quote provider.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("quote endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// The response body did not have the expected shape.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response missing '{key}'{}", provider_detail(.detail))]
    MissingSeries { key: String, detail: Option<String> },

    #[error("'{key}' is not an object")]
    SeriesNotObject { key: String },

    #[error("bar at {timestamp} has no '4. close' string")]
    MissingClose { timestamp: String },

    #[error("bar at {timestamp} has invalid close '{value}'")]
    InvalidClose { timestamp: String, value: String },

    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),
}

fn provider_detail(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default()
}

/// Everything that can abort one fetch/parse/compute cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no price data: {0}")]
    EmptySeries(#[from] SeriesError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_series_message_includes_provider_detail() {
        let err = ParseError::MissingSeries {
            key: "Time Series (1min)".into(),
            detail: Some("Invalid API call".into()),
        };
        assert_eq!(
            err.to_string(),
            "response missing 'Time Series (1min)': Invalid API call"
        );

        let bare = ParseError::MissingSeries {
            key: "Time Series (1min)".into(),
            detail: None,
        };
        assert_eq!(bare.to_string(), "response missing 'Time Series (1min)'");
    }

    #[test]
    fn out_of_range_message() {
        let err = SeriesError::OutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "index 3 out of range for series of length 2");
    }
}
