// =============================================================================
// Relative Strength Index (RSI) — simple-average form
// =============================================================================
//
// RSI measures the balance of recent up-moves against down-moves.
//
// Step 1 — Walk the window i = 1..=period over NEWEST-FIRST closes:
//            change = close[i-1] - close[i]   (later minus earlier)
// Step 2 — avg_gain = Σ positive changes / period
//          avg_loss = Σ |negative changes| / period
// Step 3 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// No Wilder smoothing: each call looks at exactly one window.
//
// When avg_loss is zero RS is undefined.  That case is reported as
// `IndicatorError::UndefinedRsi` instead of letting inf/NaN leak out.
// =============================================================================

use super::INSUFFICIENT_DATA;
use crate::error::IndicatorError;

/// Compute RSI over the `period` most recent price changes.
///
/// # Edge cases
/// - `period == 0` or fewer than `period + 1` closes => `Ok(INSUFFICIENT_DATA)`
/// - average loss of zero (only gains, or no movement) => `Err(UndefinedRsi)`
pub fn rsi(closes: &[f64], period: usize) -> Result<f64, IndicatorError> {
    if period == 0 || closes.len() < period + 1 {
        return Ok(INSUFFICIENT_DATA);
    }

    let (sum_gain, sum_loss) = closes[..=period].windows(2).fold(
        (0.0_f64, 0.0_f64),
        |(g, l), w| {
            let change = w[0] - w[1];
            if change > 0.0 {
                (g + change, l)
            } else {
                (g, l - change)
            }
        },
    );

    let period_f = period as f64;
    let avg_gain = sum_gain / period_f;
    let avg_loss = sum_loss / period_f;

    if avg_loss == 0.0 {
        return Err(IndicatorError::UndefinedRsi { period, avg_gain });
    }

    let rs = avg_gain / avg_loss;
    Ok(100.0 - 100.0 / (1.0 + rs))
}

/// Overbought/oversold label for an RSI reading.
pub fn rsi_zone(value: f64) -> &'static str {
    if value >= 70.0 {
        "overbought"
    } else if value <= 30.0 {
        "oversold"
    } else {
        "neutral"
    }
}
