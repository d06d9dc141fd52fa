use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::currencies_errors::DirectoryError;
use super::currencies_model::{CurrencyDescriptor, DirectorySnapshot};
use super::currencies_traits::{CurrencyServiceTrait, CurrencyStore};
use crate::errors::Result;

/// A snapshot plus the instant it was fetched.
struct CachedDirectory {
    snapshot: Arc<DirectorySnapshot>,
    fetched_at: Instant,
}

/// Time-expiring cache over the currency directory store.
///
/// Holds zero or one snapshot. Readers share the snapshot by reference;
/// a refresh swaps the whole entry under the write lock, so a reader never
/// observes a partially-written snapshot. Concurrent expiry may race two
/// refreshes; the last writer wins.
pub struct CurrencyService {
    store: Arc<dyn CurrencyStore>,
    ttl: Duration,
    cached: RwLock<Option<CachedDirectory>>,
}

impl CurrencyService {
    pub fn new(store: Arc<dyn CurrencyStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            cached: RwLock::new(None),
        }
    }

    fn fresh_snapshot(&self) -> Option<Arc<DirectorySnapshot>> {
        let guard = self.cached.read().unwrap();
        guard
            .as_ref()
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.snapshot.clone())
    }

    async fn refresh(&self) -> Result<Arc<DirectorySnapshot>> {
        let currencies = self
            .store
            .list_all()
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        // An empty directory is indistinguishable from a broken one; serving
        // it would read as "no currencies supported".
        if currencies.is_empty() {
            return Err(
                DirectoryError::Unavailable("directory returned no currencies".to_string()).into(),
            );
        }

        log::debug!("Refreshed currency directory: {} entries", currencies.len());

        let snapshot = Arc::new(DirectorySnapshot::new(currencies));
        let mut guard = self.cached.write().unwrap();
        *guard = Some(CachedDirectory {
            snapshot: snapshot.clone(),
            fetched_at: Instant::now(),
        });

        Ok(snapshot)
    }
}

#[async_trait]
impl CurrencyServiceTrait for CurrencyService {
    async fn get_all(&self) -> Result<Arc<DirectorySnapshot>> {
        if let Some(snapshot) = self.fresh_snapshot() {
            return Ok(snapshot);
        }
        // A failed refresh leaves any previous entry in place untouched;
        // expired entries are simply never served.
        self.refresh().await
    }

    async fn get(&self, code: &str) -> Result<Option<CurrencyDescriptor>> {
        let snapshot = self.get_all().await?;
        Ok(snapshot.find(code).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currencies::AssetClass;
    use crate::errors::{DatabaseError, Error};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockCurrencyStore {
        currencies: Vec<CurrencyDescriptor>,
        list_calls: Mutex<usize>,
        fail: bool,
    }

    impl MockCurrencyStore {
        fn with_currencies(currencies: Vec<CurrencyDescriptor>) -> Self {
            Self {
                currencies,
                list_calls: Mutex::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn list_call_count(&self) -> usize {
            *self.list_calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl CurrencyStore for MockCurrencyStore {
        async fn list_all(&self) -> Result<Vec<CurrencyDescriptor>> {
            *self.list_calls.lock().unwrap() += 1;
            if self.fail {
                return Err(Error::Database(DatabaseError::ConnectionFailed(
                    "connection refused".to_string(),
                )));
            }
            Ok(self.currencies.clone())
        }

        async fn ping(&self) -> Result<()> {
            Ok(())
        }
    }

    fn descriptor(code: &str, asset_class: AssetClass) -> CurrencyDescriptor {
        CurrencyDescriptor {
            code: code.to_string(),
            asset_class,
        }
    }

    #[tokio::test]
    async fn test_get_all_within_ttl_hits_store_once() {
        let store = Arc::new(MockCurrencyStore::with_currencies(vec![
            descriptor("USD", AssetClass::Fiat),
            descriptor("BTC", AssetClass::Crypto),
        ]));
        let service = CurrencyService::new(store.clone(), Duration::from_secs(300));

        let first = service.get_all().await.unwrap();
        let second = service.get_all().await.unwrap();

        assert_eq!(first.len(), 2);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.list_call_count(), 1);
    }

    #[tokio::test]
    async fn test_get_all_past_ttl_refreshes_once() {
        let store = Arc::new(MockCurrencyStore::with_currencies(vec![descriptor(
            "USD",
            AssetClass::Fiat,
        )]));
        // Zero TTL: every call finds the cached snapshot expired.
        let service = CurrencyService::new(store.clone(), Duration::ZERO);

        service.get_all().await.unwrap();
        service.get_all().await.unwrap();

        assert_eq!(store.list_call_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_directory_is_unavailable() {
        let store = Arc::new(MockCurrencyStore::with_currencies(vec![]));
        let service = CurrencyService::new(store, Duration::from_secs(300));

        let err = service.get_all().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Directory(DirectoryError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_store_failure_is_unavailable() {
        let store = Arc::new(MockCurrencyStore::failing());
        let service = CurrencyService::new(store, Duration::from_secs(300));

        let err = service.get_all().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Directory(DirectoryError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_get_unknown_code_is_a_plain_miss() {
        let store = Arc::new(MockCurrencyStore::with_currencies(vec![descriptor(
            "USD",
            AssetClass::Fiat,
        )]));
        let service = CurrencyService::new(store.clone(), Duration::from_secs(300));

        assert!(service.get("ZZZ").await.unwrap().is_none());
        assert!(service.get("ZZZ").await.unwrap().is_none());
        // Misses ride the cached snapshot; no extra store traffic.
        assert_eq!(store.list_call_count(), 1);
    }
}
