// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free indicator functions over a newest-first slice of
// close prices.  Nothing here keeps state between calls; every value is
// recomputed from the slice it is handed.
//
// Insufficient data is reported with the sentinel `INSUFFICIENT_DATA` (0.0),
// which callers cannot tell apart from a genuine zero.  The only hard failure
// is RSI with zero average loss, surfaced as `IndicatorError::UndefinedRsi`.

pub mod bollinger;
pub mod moving_average;
pub mod rsi;
pub mod trend;

pub use bollinger::{bollinger_band, standard_deviation, Band};
pub use moving_average::{ema, sma, wma};
pub use rsi::{rsi, rsi_zone};
pub use trend::detect_trend;

/// Value returned when the window is larger than the available history.
pub const INSUFFICIENT_DATA: f64 = 0.0;
