//! Yahoo Finance price feed provider.
//!
//! Fetches the latest close for:
//! - Cryptocurrencies (e.g., BTC-USD)
//! - Foreign exchange rates (e.g., BRL=X, USDBRL=X)

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use tracing::warn;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::FeedQuote;
use crate::provider::PriceProvider;

const PROVIDER_ID: &str = "YAHOO";

/// Yahoo Finance price feed provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self { connector })
    }

    /// Convert a Yahoo quote to our FeedQuote model.
    fn yahoo_quote_to_feed_quote(
        symbol: &str,
        yahoo_quote: yahoo::Quote,
    ) -> Result<FeedQuote, MarketDataError> {
        let timestamp: DateTime<Utc> = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid timestamp: {}", yahoo_quote.timestamp),
            })?;

        let close = Decimal::from_f64_retain(yahoo_quote.close).ok_or_else(|| {
            MarketDataError::ValidationFailed {
                message: format!(
                    "Failed to convert close price {} to Decimal",
                    yahoo_quote.close
                ),
            }
        })?;

        Ok(FeedQuote {
            symbol: symbol.to_string(),
            close,
            timestamp,
            source: PROVIDER_ID.to_string(),
        })
    }
}

#[async_trait]
impl PriceProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_close(&self, symbol: &str) -> Result<FeedQuote, MarketDataError> {
        let response = self
            .connector
            .get_latest_quotes(symbol, "1d")
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    MarketDataError::SymbolNotFound(symbol.to_string())
                } else {
                    MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        let yahoo_quote = response.last_quote().map_err(|e| {
            warn!("No quotes returned for {}: {}", symbol, e);
            MarketDataError::SymbolNotFound(symbol.to_string())
        })?;

        Self::yahoo_quote_to_feed_quote(symbol, yahoo_quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_yahoo_quote(timestamp: i64, close: f64) -> yahoo::Quote {
        yahoo::Quote {
            timestamp,
            open: close,
            high: close,
            low: close,
            volume: 0,
            close,
            adjclose: close,
        }
    }

    #[test]
    fn test_quote_conversion() {
        let quote = sample_yahoo_quote(1_700_000_000, 5.04);
        let feed_quote = YahooProvider::yahoo_quote_to_feed_quote("BRL=X", quote).unwrap();

        assert_eq!(feed_quote.symbol, "BRL=X");
        assert_eq!(feed_quote.close, dec!(5.04));
        assert_eq!(feed_quote.source, "YAHOO");
        assert_eq!(feed_quote.timestamp.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_quote_conversion_rejects_nan_close() {
        let quote = sample_yahoo_quote(1_700_000_000, f64::NAN);
        let result = YahooProvider::yahoo_quote_to_feed_quote("BRL=X", quote);

        assert!(matches!(
            result,
            Err(MarketDataError::ValidationFailed { .. })
        ));
    }
}
