// =============================================================================
// Ticker Watch — Main Entry Point
// =============================================================================
//
// Prompts for a symbol and an update interval, then polls the quote provider
// forever and prints the indicator report after every fetch.  Ctrl+C stops
// the loop.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod alpha_vantage;
mod error;
mod indicators;
mod market_data;
mod monitor;
mod prompt;
mod report;
mod runtime_config;
mod types;

use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::alpha_vantage::AlphaVantageClient;
use crate::monitor::{Monitor, TokioSleeper};
use crate::runtime_config::{RuntimeConfig, API_KEY_ENV};

const CONFIG_PATH: &str = "ticker_config.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    // Logs go to stderr; stdout carries the prompts and the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = RuntimeConfig::load(CONFIG_PATH).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        RuntimeConfig::default()
    });
    config.apply_api_key_override(std::env::var(API_KEY_ENV).ok());

    info!(config = ?config, "Configuration resolved");

    // ── 2. Operator prompts ──────────────────────────────────────────────
    let (symbol, interval_secs) = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        let symbol = prompt::prompt_symbol(&mut input, &mut output)?;
        let interval_secs = prompt::prompt_interval(&mut input, &mut output)?;
        (symbol, interval_secs)
    };

    // ── 3. Monitor loop ──────────────────────────────────────────────────
    let client = AlphaVantageClient::new(&config)?;
    let mut monitor = Monitor::new(
        client,
        TokioSleeper,
        symbol.clone(),
        Duration::from_secs(interval_secs),
    )
    .with_failure_limit(config.max_consecutive_failures);

    info!(symbol = %symbol, interval_secs, "Watching symbol. Press Ctrl+C to stop.");

    // ── 4. Run until Ctrl+C or failure limit ─────────────────────────────
    tokio::select! {
        result = monitor.run() => result?,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            warn!("Shutdown signal received");
        }
    }

    info!("Ticker Watch shut down complete.");
    Ok(())
}
