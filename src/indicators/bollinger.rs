// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ), where σ is the POPULATION standard deviation
// (divide by `period`, not `period - 1`) of the same window.

use super::moving_average::sma;
use super::INSUFFICIENT_DATA;

/// Which side of the envelope to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Upper,
    Lower,
}

/// Population standard deviation of the `period` most recent closes around
/// their SMA.
///
/// Returns [`INSUFFICIENT_DATA`] when `period == 0` or fewer than `period`
/// closes are available.
pub fn standard_deviation(closes: &[f64], period: usize) -> f64 {
    if period == 0 || closes.len() < period {
        return INSUFFICIENT_DATA;
    }

    let mean = sma(closes, period);
    let variance = closes[..period]
        .iter()
        .map(|x| (x - mean).powi(2))
        .sum::<f64>()
        / period as f64;
    variance.sqrt()
}

/// One side of the Bollinger envelope: `SMA ± multiplier * σ`.
///
/// With insufficient data both SMA and σ are the sentinel, so the band is
/// the sentinel as well.
pub fn bollinger_band(closes: &[f64], period: usize, multiplier: f64, band: Band) -> f64 {
    let middle = sma(closes, period);
    let offset = multiplier * standard_deviation(closes, period);

    match band {
        Band::Upper => middle + offset,
        Band::Lower => middle - offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_dev_textbook_example() {
        // Population σ of this classic sample is exactly 2.
        let closes = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((standard_deviation(&closes, 8) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn std_dev_constant_series_is_zero() {
        let closes = vec![100.0; 25];
        for period in 1..=25 {
            assert_eq!(standard_deviation(&closes, period), 0.0);
        }
    }

    #[test]
    fn std_dev_insufficient_data_is_zero() {
        assert_eq!(standard_deviation(&[1.0, 2.0, 3.0], 20), 0.0);
    }

    #[test]
    fn band_width_is_twice_k_sigma() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + ((i * 7) % 11) as f64).collect();
        for &k in &[0.5, 1.0, 2.0, 3.0] {
            let upper = bollinger_band(&closes, 20, k, Band::Upper);
            let lower = bollinger_band(&closes, 20, k, Band::Lower);
            let sigma = standard_deviation(&closes, 20);
            assert!((upper - lower - 2.0 * k * sigma).abs() < 1e-9);
        }
    }

    #[test]
    fn bollinger_basic() {
        let closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let middle = sma(&closes, 20);
        assert!((middle - 10.5).abs() < 1e-10);
        assert!(bollinger_band(&closes, 20, 2.0, Band::Upper) > middle);
        assert!(bollinger_band(&closes, 20, 2.0, Band::Lower) < middle);
    }

    #[test]
    fn bollinger_flat() {
        let closes = vec![100.0; 20];
        assert_eq!(bollinger_band(&closes, 20, 2.0, Band::Upper), 100.0);
        assert_eq!(bollinger_band(&closes, 20, 2.0, Band::Lower), 100.0);
    }

    #[test]
    fn bollinger_insufficient_data() {
        let closes = vec![1.0, 2.0, 3.0];
        assert_eq!(bollinger_band(&closes, 20, 2.0, Band::Upper), 0.0);
        assert_eq!(bollinger_band(&closes, 20, 2.0, Band::Lower), 0.0);
    }
}
