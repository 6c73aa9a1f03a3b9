use tracing::debug;

use crate::error::SeriesError;
use crate::types::PricePoint;

// ---------------------------------------------------------------------------
// SeriesStore -- newest-first price history for the watched symbol
// ---------------------------------------------------------------------------

/// Price history for one symbol, newest first (index 0 = most recent).
///
/// Closes and timestamps live in two parallel vectors so the indicator engine
/// can borrow the closes as a plain slice.  Both vectors are only ever
/// rebuilt together by [`SeriesStore::replace`]; there is no incremental
/// append or merge with earlier fetches.
#[derive(Debug, Default, Clone)]
pub struct SeriesStore {
    prices: Vec<f64>,
    timestamps: Vec<i64>,
}

impl SeriesStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current history and rebuild it from `points`, which must
    /// already be ordered newest first.
    ///
    /// A shorter input shrinks the visible window.
    pub fn replace(&mut self, points: &[PricePoint]) {
        let previous = self.prices.len();

        self.prices.clear();
        self.timestamps.clear();
        self.prices.reserve(points.len());
        self.timestamps.reserve(points.len());

        for p in points {
            self.prices.push(p.close);
            self.timestamps.push(p.timestamp_ms);
        }

        debug!(previous, current = self.prices.len(), "series replaced");
    }

    /// Number of points currently held.
    pub fn size(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// The point at `index` (0 = most recent).
    pub fn at(&self, index: usize) -> Result<PricePoint, SeriesError> {
        match (self.timestamps.get(index), self.prices.get(index)) {
            (Some(&ts), Some(&close)) => Ok(PricePoint::new(ts, close)),
            _ => Err(SeriesError::OutOfRange {
                index,
                len: self.prices.len(),
            }),
        }
    }

    /// The most recent point.
    pub fn latest(&self) -> Result<PricePoint, SeriesError> {
        self.at(0)
    }

    /// Close prices, newest first.
    pub fn closes(&self) -> &[f64] {
        &self.prices
    }
}
