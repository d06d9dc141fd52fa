use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;

use super::model::PriceQuote;
use crate::constants::ANCHOR_CURRENCY;
use crate::currencies::AssetClass;
use cambio_market_data::PriceProvider;

/// Resolves the USD value of a single currency against the price feed.
///
/// This is the only place that knows the feed's ticker conventions:
///
/// - `USD` is the anchor and is always worth exactly 1.0, no call made;
/// - crypto trades as an explicit pair, `{code}-USD`;
/// - fiat uses the feed's `{code}=X` shorthand, which the feed reads as
///   "one unit of `code` priced in USD".
///
/// Every lookup is bounded by a timeout, and any failure — unknown symbol,
/// transport error, timeout — degrades to a soft miss. One unavailable
/// quote must not fail a whole conversion table.
pub struct QuoteResolver {
    provider: Arc<dyn PriceProvider>,
    timeout: Duration,
}

impl QuoteResolver {
    pub fn new(provider: Arc<dyn PriceProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Feed symbol for one unit of `code` priced in USD.
    pub fn feed_symbol(code: &str, asset_class: AssetClass) -> String {
        match asset_class {
            AssetClass::Crypto => format!("{}-USD", code),
            AssetClass::Fiat => format!("{}=X", code),
        }
    }

    /// Feed symbol for one USD priced in units of `code`.
    pub fn inverse_feed_symbol(code: &str) -> String {
        format!("USD{}=X", code)
    }

    /// Resolve the USD value of one unit of `code`.
    pub async fn resolve(&self, code: &str, asset_class: AssetClass) -> PriceQuote {
        if code == ANCHOR_CURRENCY {
            return PriceQuote::hit(code, Decimal::ONE);
        }
        let symbol = Self::feed_symbol(code, asset_class);
        self.fetch(code, &symbol).await
    }

    /// Resolve how many units of `code` one USD buys (the inverse pair).
    ///
    /// Only meaningful for fiat; the rate normalizer uses it as the
    /// fallback when a fiat base has no direct quote.
    pub async fn resolve_usd_in(&self, code: &str) -> PriceQuote {
        let symbol = Self::inverse_feed_symbol(code);
        self.fetch(code, &symbol).await
    }

    async fn fetch(&self, code: &str, symbol: &str) -> PriceQuote {
        match tokio::time::timeout(self.timeout, self.provider.latest_close(symbol)).await {
            Ok(Ok(quote)) => {
                // The feed occasionally reports a flat zero for symbols it
                // half-knows; that is no price at all.
                if quote.close.is_zero() {
                    log::debug!("Zero close for {} ({}), treating as miss", code, symbol);
                    return PriceQuote::miss(code);
                }
                PriceQuote::hit(code, quote.close)
            }
            Ok(Err(e)) => {
                log::debug!("Quote miss for {} ({}): {}", code, symbol, e);
                PriceQuote::miss(code)
            }
            Err(_) => {
                log::debug!(
                    "Quote timeout for {} ({}) after {:?}",
                    code,
                    symbol,
                    self.timeout
                );
                PriceQuote::miss(code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cambio_market_data::{FeedQuote, MarketDataError};
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Price feed stub: canned closes per symbol, records every symbol
    /// it was asked for.
    #[derive(Default)]
    struct MockPriceProvider {
        prices: HashMap<String, Decimal>,
        requested: Mutex<Vec<String>>,
    }

    impl MockPriceProvider {
        fn with_prices(prices: &[(&str, Decimal)]) -> Self {
            Self {
                prices: prices
                    .iter()
                    .map(|(s, p)| (s.to_string(), *p))
                    .collect(),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested_symbols(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PriceProvider for MockPriceProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn latest_close(&self, symbol: &str) -> Result<FeedQuote, MarketDataError> {
            self.requested.lock().unwrap().push(symbol.to_string());
            match self.prices.get(symbol) {
                Some(close) => Ok(FeedQuote::new(
                    symbol.to_string(),
                    *close,
                    Utc::now(),
                    "MOCK".to_string(),
                )),
                None => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
            }
        }
    }

    fn resolver(provider: Arc<MockPriceProvider>) -> QuoteResolver {
        QuoteResolver::new(provider, Duration::from_secs(5))
    }

    #[test]
    fn test_feed_symbol_construction() {
        assert_eq!(QuoteResolver::feed_symbol("BTC", AssetClass::Crypto), "BTC-USD");
        assert_eq!(QuoteResolver::feed_symbol("BRL", AssetClass::Fiat), "BRL=X");
        assert_eq!(QuoteResolver::inverse_feed_symbol("BRL"), "USDBRL=X");
    }

    #[tokio::test]
    async fn test_usd_short_circuits_without_feed_call() {
        let provider = Arc::new(MockPriceProvider::default());
        let quote = resolver(provider.clone())
            .resolve("USD", AssetClass::Fiat)
            .await;

        assert_eq!(quote.usd_value, Some(Decimal::ONE));
        assert!(provider.requested_symbols().is_empty());
    }

    #[tokio::test]
    async fn test_resolve_crypto_pair() {
        let provider = Arc::new(MockPriceProvider::with_prices(&[(
            "ETH-USD",
            dec!(3200.5),
        )]));
        let quote = resolver(provider.clone())
            .resolve("ETH", AssetClass::Crypto)
            .await;

        assert_eq!(quote.usd_value, Some(dec!(3200.5)));
        assert_eq!(provider.requested_symbols(), vec!["ETH-USD"]);
    }

    #[tokio::test]
    async fn test_feed_error_is_a_soft_miss() {
        let provider = Arc::new(MockPriceProvider::default());
        let quote = resolver(provider)
            .resolve("JPY", AssetClass::Fiat)
            .await;

        assert!(quote.is_miss());
        assert_eq!(quote.code, "JPY");
    }

    #[tokio::test]
    async fn test_zero_close_is_a_soft_miss() {
        let provider = Arc::new(MockPriceProvider::with_prices(&[("ARS=X", dec!(0))]));
        let quote = resolver(provider)
            .resolve("ARS", AssetClass::Fiat)
            .await;

        assert!(quote.is_miss());
    }
}
