// =============================================================================
// Per-cycle indicator report
// =============================================================================
//
// One `IndicatorSnapshot` is computed from the series after every successful
// fetch and printed as a labelled block.  Periods are fixed.
// =============================================================================

use std::fmt;

use crate::error::{IndicatorError, SeriesError};
use crate::indicators::{self, rsi_zone, Band};
use crate::market_data::SeriesStore;
use crate::types::{PricePoint, Trend};

pub const SMA_PERIOD: usize = 5;
pub const EMA_PERIOD: usize = 10;
pub const WMA_PERIOD: usize = 20;
pub const VOLATILITY_PERIOD: usize = 20;
pub const BOLLINGER_MULTIPLIER: f64 = 2.0;
pub const TREND_SHORT_PERIOD: usize = 10;
pub const TREND_LONG_PERIOD: usize = 30;
pub const RSI_PERIOD: usize = 14;

/// Every value shown for one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSnapshot {
    pub latest: PricePoint,
    pub sma: f64,
    pub ema: f64,
    pub wma: f64,
    pub std_dev: f64,
    pub bollinger_upper: f64,
    pub bollinger_lower: f64,
    pub trend: Trend,
    pub rsi: Result<f64, IndicatorError>,
}

impl IndicatorSnapshot {
    /// Compute the snapshot from the store's current contents.
    ///
    /// Fails only when the store is empty (there is no latest price).
    pub fn compute(store: &SeriesStore) -> Result<Self, SeriesError> {
        let latest = store.latest()?;
        let closes = store.closes();

        Ok(Self {
            latest,
            sma: indicators::sma(closes, SMA_PERIOD),
            ema: indicators::ema(closes, EMA_PERIOD),
            wma: indicators::wma(closes, WMA_PERIOD),
            std_dev: indicators::standard_deviation(closes, VOLATILITY_PERIOD),
            bollinger_upper: indicators::bollinger_band(
                closes,
                VOLATILITY_PERIOD,
                BOLLINGER_MULTIPLIER,
                Band::Upper,
            ),
            bollinger_lower: indicators::bollinger_band(
                closes,
                VOLATILITY_PERIOD,
                BOLLINGER_MULTIPLIER,
                Band::Lower,
            ),
            trend: indicators::detect_trend(closes, TREND_SHORT_PERIOD, TREND_LONG_PERIOD),
            rsi: indicators::rsi(closes, RSI_PERIOD),
        })
    }
}

/// Console rendering of a snapshot for `symbol`.
pub struct Report<'a> {
    pub symbol: &'a str,
    pub snapshot: &'a IndicatorSnapshot,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.snapshot;

        writeln!(f, "Analysis for {}:", self.symbol)?;
        write!(f, "Latest price: ${:.2}", s.latest.close)?;
        match s.latest.local_time() {
            Some(t) => writeln!(f, " (as of {})", t.format("%Y-%m-%d %H:%M:%S"))?,
            None => writeln!(f)?,
        }

        writeln!(f, "Moving Averages:")?;
        writeln!(f, "  {SMA_PERIOD}-period SMA: ${:.2}", s.sma)?;
        writeln!(f, "  {EMA_PERIOD}-period EMA: ${:.2}", s.ema)?;
        writeln!(f, "  {WMA_PERIOD}-period WMA: ${:.2}", s.wma)?;

        writeln!(f, "Volatility:")?;
        writeln!(
            f,
            "  {VOLATILITY_PERIOD}-period Standard Deviation: ${:.4}",
            s.std_dev
        )?;
        writeln!(
            f,
            "  {VOLATILITY_PERIOD}-period Bollinger Bands: ${:.2} (upper), ${:.2} (lower)",
            s.bollinger_upper, s.bollinger_lower
        )?;

        writeln!(f, "Trend Detection:")?;
        writeln!(
            f,
            "  Short-term trend ({TREND_SHORT_PERIOD} vs {TREND_LONG_PERIOD} periods): {}",
            s.trend
        )?;
        match &s.rsi {
            Ok(value) => writeln!(f, "  {RSI_PERIOD}-period RSI: {value:.2} ({})", rsi_zone(*value)),
            Err(IndicatorError::UndefinedRsi { .. }) => writeln!(
                f,
                "  {RSI_PERIOD}-period RSI: undefined (no losing moves in window)"
            ),
        }
    }
}
