// =============================================================================
// Alpha Vantage REST client — intraday time series
// =============================================================================
//
// SECURITY: the API key travels as a query parameter (the provider offers no
// header alternative).  It is never logged and is redacted from `Debug`.
// =============================================================================

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::FetchError;
use crate::monitor::QuoteSource;
use crate::runtime_config::RuntimeConfig;

/// Thin HTTP client for `function=TIME_SERIES_INTRADAY`.
#[derive(Clone)]
pub struct AlphaVantageClient {
    api_key: String,
    base_url: String,
    interval: String,
    output_size: String,
    client: reqwest::Client,
}

impl AlphaVantageClient {
    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    /// Build a client from the runtime configuration.
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("failed to build reqwest client")?;

        debug!(
            base_url = %config.base_url,
            interval = %config.interval,
            "AlphaVantageClient initialised"
        );

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            interval: config.interval.clone(),
            output_size: config.output_size.clone(),
            client,
        })
    }

    // -------------------------------------------------------------------------
    // Requests
    // -------------------------------------------------------------------------

    /// The GET request for `symbol`, not yet sent.
    pub fn intraday_request(&self, symbol: &str) -> reqwest::RequestBuilder {
        self.client.get(&self.base_url).query(&[
            ("function", "TIME_SERIES_INTRADAY"),
            ("symbol", symbol),
            ("interval", self.interval.as_str()),
            ("outputsize", self.output_size.as_str()),
            ("apikey", self.api_key.as_str()),
        ])
    }

    /// GET the intraday series for `symbol` and return the raw body.
    ///
    /// The provider answers quota and bad-symbol problems with HTTP 200 and a
    /// note in the body; those surface later as a parse error.
    #[instrument(skip(self), name = "alpha_vantage::fetch_intraday")]
    pub async fn fetch_intraday(&self, symbol: &str) -> Result<String, FetchError> {
        let resp = self.intraday_request(symbol).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body });
        }

        debug!(symbol, bytes = body.len(), "intraday series fetched");
        Ok(body)
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageClient {
    async fn fetch(&self, symbol: &str) -> Result<String, FetchError> {
        self.fetch_intraday(symbol).await
    }

    fn interval(&self) -> &str {
        &self.interval
    }
}

impl std::fmt::Debug for AlphaVantageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("interval", &self.interval)
            .field("output_size", &self.output_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AlphaVantageClient {
        let config = RuntimeConfig {
            api_key: "secret-key".into(),
            ..RuntimeConfig::default()
        };
        AlphaVantageClient::new(&config).unwrap()
    }

    #[test]
    fn request_carries_all_query_parameters() {
        let req = client().intraday_request("IBM").build().unwrap();
        let url = req.url();

        assert_eq!(url.host_str(), Some("www.alphavantage.co"));
        assert_eq!(url.path(), "/query");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("function"), Some("TIME_SERIES_INTRADAY"));
        assert_eq!(get("symbol"), Some("IBM"));
        assert_eq!(get("interval"), Some("1min"));
        assert_eq!(get("outputsize"), Some("compact"));
        assert_eq!(get("apikey"), Some("secret-key"));
    }

    #[test]
    fn symbol_is_query_encoded() {
        let req = client().intraday_request("BRK.B&x=1").build().unwrap();
        let symbol = req
            .url()
            .query_pairs()
            .find(|(k, _)| k == "symbol")
            .map(|(_, v)| v.into_owned());
        assert_eq!(symbol.as_deref(), Some("BRK.B&x=1"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
