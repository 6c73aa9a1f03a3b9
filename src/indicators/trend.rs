// =============================================================================
// Trend Detection — short vs long SMA crossover
// =============================================================================

use super::moving_average::sma;
use crate::types::Trend;

/// Classify the trend by comparing the short-window SMA to the long-window
/// SMA.
///
/// Returns [`Trend::InsufficientData`] whenever fewer than `long_period`
/// closes are available, regardless of `short_period`.  Equality is exact;
/// two SMAs that differ only in the last bit are not "Sideways".
pub fn detect_trend(closes: &[f64], short_period: usize, long_period: usize) -> Trend {
    if closes.len() < long_period {
        return Trend::InsufficientData;
    }

    let short_ma = sma(closes, short_period);
    let long_ma = sma(closes, long_period);

    if short_ma > long_ma {
        Trend::Uptrend
    } else if short_ma < long_ma {
        Trend::Downtrend
    } else {
        Trend::Sideways
    }
}
