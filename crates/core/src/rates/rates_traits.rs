use async_trait::async_trait;

use super::rates_model::ConversionTable;
use crate::errors::Result;

#[async_trait]
pub trait RateServiceTrait: Send + Sync {
    /// Compute the full conversion table for `base_code`.
    ///
    /// Fails with [`super::RatesError::UnknownBase`] when the directory
    /// does not list the code, and [`super::RatesError::BaseUnavailable`]
    /// when no USD value can be established for it.
    async fn compute_table(&self, base_code: &str) -> Result<ConversionTable>;
}
