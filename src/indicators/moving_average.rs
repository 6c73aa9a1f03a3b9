// =============================================================================
// Moving Averages — SMA, EMA, WMA over the most recent `period` closes
// =============================================================================
//
// All functions take closes ordered NEWEST FIRST (index 0 = latest) and only
// look at positions 0..period.
//
//   SMA = Σ close_i / period
//   EMA: α = 2 / (period + 1), seeded with close_0, then for i in 1..period
//        ema = α * close_i + (1 - α) * ema
//   WMA = Σ close_i * (period - i) / Σ (period - i)
//
// NOTE: the EMA walks from the latest close toward older ones, the reverse
// of the textbook oldest-to-newest recurrence.  Existing output depends on
// it; changing the direction changes every reported value.
// =============================================================================

use super::INSUFFICIENT_DATA;

/// Simple moving average of the `period` most recent closes.
///
/// Returns [`INSUFFICIENT_DATA`] when `period == 0` or fewer than `period`
/// closes are available.
pub fn sma(closes: &[f64], period: usize) -> f64 {
    if period == 0 || closes.len() < period {
        return INSUFFICIENT_DATA;
    }
    closes[..period].iter().sum::<f64>() / period as f64
}

/// Exponential moving average seeded with the latest close and iterated
/// toward older closes.
///
/// Returns [`INSUFFICIENT_DATA`] when `period == 0` or fewer than `period`
/// closes are available.
pub fn ema(closes: &[f64], period: usize) -> f64 {
    if period == 0 || closes.len() < period {
        return INSUFFICIENT_DATA;
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    closes[1..period]
        .iter()
        .fold(closes[0], |prev, &close| alpha * close + (1.0 - alpha) * prev)
}

/// Linear weight of position `index` inside a `period`-wide window.
///
/// The latest close (index 0) gets `period`, the oldest in the window gets 1.
pub fn wma_weight(period: usize, index: usize) -> f64 {
    period.saturating_sub(index) as f64
}

/// Weighted moving average with linearly decreasing weights from newest to
/// oldest.
///
/// Returns [`INSUFFICIENT_DATA`] when `period == 0` or fewer than `period`
/// closes are available.
pub fn wma(closes: &[f64], period: usize) -> f64 {
    if period == 0 || closes.len() < period {
        return INSUFFICIENT_DATA;
    }

    let (weighted, weight_sum) = closes[..period].iter().enumerate().fold(
        (0.0_f64, 0.0_f64),
        |(sum, wsum), (i, &close)| {
            let w = wma_weight(period, i);
            (sum + close * w, wsum + w)
        },
    );

    weighted / weight_sum
}
