use std::sync::Arc;

use async_trait::async_trait;

use super::currencies_model::{CurrencyDescriptor, DirectorySnapshot};
use crate::errors::Result;

/// The external currency directory store.
///
/// Implemented by the storage layer. Reads only; the listed currency set
/// is maintained out of band.
#[async_trait]
pub trait CurrencyStore: Send + Sync {
    /// List every currency the directory knows, in the directory's stable
    /// order.
    async fn list_all(&self) -> Result<Vec<CurrencyDescriptor>>;

    /// One trivial read against the store, for liveness checks.
    async fn ping(&self) -> Result<()>;
}

/// Cached access to the currency directory.
#[async_trait]
pub trait CurrencyServiceTrait: Send + Sync {
    /// The current directory snapshot, served from cache while fresh.
    async fn get_all(&self) -> Result<Arc<DirectorySnapshot>>;

    /// Look up a single currency by code. A miss is not an error.
    async fn get(&self, code: &str) -> Result<Option<CurrencyDescriptor>>;
}
