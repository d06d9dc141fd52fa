use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use rust_decimal::Decimal;

use super::rates_errors::RatesError;
use super::rates_model::ConversionTable;
use super::rates_traits::RateServiceTrait;
use crate::constants::{ANCHOR_CURRENCY, QUOTE_FETCH_BATCH_SIZE, RATE_DECIMAL_PRECISION};
use crate::currencies::{AssetClass, CurrencyDescriptor, CurrencyServiceTrait};
use crate::errors::Result;
use crate::quotes::{PriceQuote, QuoteResolver};

/// Anchor-based rate normalizer.
///
/// Turns a bag of independently-fetched, possibly-missing USD quotes into a
/// coherent base-relative conversion table. All cross-rates go through the
/// USD anchor: `rates[c] = usd(c) / usd(base)`, rounded to 8 decimal places
/// (banker's rounding).
pub struct RateService {
    currencies: Arc<dyn CurrencyServiceTrait>,
    resolver: Arc<QuoteResolver>,
}

impl RateService {
    pub fn new(currencies: Arc<dyn CurrencyServiceTrait>, resolver: Arc<QuoteResolver>) -> Self {
        Self {
            currencies,
            resolver,
        }
    }

    /// Establish the USD value of one unit of the base currency.
    ///
    /// Fiat gets one inverse attempt (`USD{base}=X`, read as units of base
    /// per USD) when the direct quote misses; crypto does not — the feed
    /// has no inverse convention for crypto pairs.
    async fn resolve_base_usd(&self, base: &CurrencyDescriptor) -> Result<Decimal> {
        if base.code == ANCHOR_CURRENCY {
            return Ok(Decimal::ONE);
        }

        let direct = self.resolver.resolve(&base.code, base.asset_class).await;
        if let Some(value) = direct.usd_value {
            return Ok(value);
        }

        if base.asset_class == AssetClass::Fiat {
            let inverse = self.resolver.resolve_usd_in(&base.code).await;
            if let Some(value) = inverse.usd_value {
                log::debug!(
                    "Base {} resolved through inverse quote: {} per USD",
                    base.code,
                    value
                );
                return Ok(Decimal::ONE / value);
            }
        }

        Err(RatesError::BaseUnavailable(base.code.clone()).into())
    }

    /// Resolve USD quotes for every listed currency, in directory order,
    /// fanning out in bounded batches.
    async fn resolve_all(
        &self,
        currencies: &[CurrencyDescriptor],
        base_code: &str,
    ) -> Vec<PriceQuote> {
        let mut quotes = Vec::with_capacity(currencies.len());
        for chunk in currencies.chunks(QUOTE_FETCH_BATCH_SIZE) {
            let batch = chunk.iter().map(|currency| async move {
                if currency.code == base_code {
                    // The base's own entry is pinned to 1.0 at assembly;
                    // no feed call needed.
                    PriceQuote::hit(currency.code.clone(), Decimal::ONE)
                } else {
                    self.resolver
                        .resolve(&currency.code, currency.asset_class)
                        .await
                }
            });
            quotes.extend(join_all(batch).await);
        }
        quotes
    }
}

#[async_trait]
impl RateServiceTrait for RateService {
    async fn compute_table(&self, base_code: &str) -> Result<ConversionTable> {
        let base_code = base_code.to_uppercase();

        let base = self
            .currencies
            .get(&base_code)
            .await?
            .ok_or_else(|| RatesError::UnknownBase(base_code.clone()))?;

        let base_usd = self.resolve_base_usd(&base).await?;

        let snapshot = self.currencies.get_all().await?;
        let quotes = self.resolve_all(&snapshot.currencies, &base_code).await;

        let mut rates = Vec::with_capacity(snapshot.len());
        for (currency, quote) in snapshot.currencies.iter().zip(quotes) {
            if currency.code == base_code {
                rates.push((currency.code.clone(), Decimal::ONE));
            } else if let Some(usd_value) = quote.usd_value {
                let rate = (usd_value / base_usd).round_dp(RATE_DECIMAL_PRECISION);
                rates.push((currency.code.clone(), rate));
            }
            // A miss is an omission, not an entry.
        }

        log::debug!(
            "Computed {} rates for base {} ({} listed)",
            rates.len(),
            base_code,
            snapshot.len()
        );

        Ok(ConversionTable { base_code, rates })
    }
}
