// =============================================================================
// Monitor loop — fetch, replace, compute, print, sleep
// =============================================================================
//
// The monitor owns the only `SeriesStore`.  Each cycle runs to completion
// before the sleep, so the store has exactly one writer and one reader and
// they never overlap.
//
// A failed cycle leaves the store untouched (parse happens before replace),
// is logged and printed, and the loop carries on after the usual sleep.  An
// optional limit on consecutive failures turns a persistent outage into a
// hard stop.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::alpha_vantage::parse_intraday;
use crate::error::{CycleError, FetchError};
use crate::market_data::SeriesStore;
use crate::report::{IndicatorSnapshot, Report};

/// Anything that can hand back a raw intraday response for a symbol.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<String, FetchError>;

    /// Bar interval of the responses, used to locate the series in the body.
    fn interval(&self) -> &str;
}

/// The pause between cycles.  Injected so tests can run without delays.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

pub struct Monitor<Q, S> {
    source: Q,
    sleeper: S,
    symbol: String,
    update_interval: Duration,
    max_consecutive_failures: u32,
    store: SeriesStore,
}

impl<Q: QuoteSource, S: Sleeper> Monitor<Q, S> {
    pub fn new(source: Q, sleeper: S, symbol: impl Into<String>, update_interval: Duration) -> Self {
        Self {
            source,
            sleeper,
            symbol: symbol.into(),
            update_interval,
            max_consecutive_failures: 0,
            store: SeriesStore::new(),
        }
    }

    /// Stop after `limit` failed cycles in a row (0 = never).
    pub fn with_failure_limit(mut self, limit: u32) -> Self {
        self.max_consecutive_failures = limit;
        self
    }

    #[cfg(test)]
    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    /// One fetch → parse → replace → compute pass.
    pub async fn run_cycle(&mut self) -> Result<IndicatorSnapshot, CycleError> {
        let body = self.source.fetch(&self.symbol).await?;
        let points = parse_intraday(&body, self.source.interval())?;

        self.store.replace(&points);
        if self.store.is_empty() {
            warn!(symbol = %self.symbol, "response contained no bars");
        }

        Ok(IndicatorSnapshot::compute(&self.store)?)
    }

    /// Run until the process is stopped, or until the failure limit trips.
    pub async fn run(&mut self) -> Result<(), CycleError> {
        self.run_cycles(None).await
    }

    /// Run at most `max_cycles` cycles (`None` = forever).  No sleep follows
    /// the final cycle.
    pub async fn run_cycles(&mut self, max_cycles: Option<u64>) -> Result<(), CycleError> {
        let mut cycle: u64 = 0;
        let mut consecutive_failures: u32 = 0;

        info!(
            symbol = %self.symbol,
            interval_secs = self.update_interval.as_secs(),
            "monitor loop starting"
        );

        loop {
            cycle += 1;

            match self.run_cycle().await {
                Ok(snapshot) => {
                    consecutive_failures = 0;
                    info!(
                        symbol = %self.symbol,
                        cycle,
                        points = self.store.size(),
                        latest = snapshot.latest.close,
                        trend = %snapshot.trend,
                        "cycle complete"
                    );
                    println!(
                        "{}",
                        Report {
                            symbol: &self.symbol,
                            snapshot: &snapshot,
                        }
                    );
                }
                Err(e) => {
                    consecutive_failures += 1;
                    error!(
                        symbol = %self.symbol,
                        cycle,
                        consecutive_failures,
                        error = %e,
                        "update cycle failed"
                    );
                    println!("Update failed for {}: {e}", self.symbol);

                    if self.max_consecutive_failures > 0
                        && consecutive_failures >= self.max_consecutive_failures
                    {
                        error!(
                            limit = self.max_consecutive_failures,
                            "consecutive failure limit reached, stopping"
                        );
                        return Err(e);
                    }
                }
            }

            if max_cycles.is_some_and(|max| cycle >= max) {
                return Ok(());
            }

            println!(
                "\nNext update in {} seconds...\n",
                self.update_interval.as_secs()
            );
            self.sleeper.sleep(self.update_interval).await;
        }
    }
}
