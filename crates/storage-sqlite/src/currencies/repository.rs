use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::model::CurrencyDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::currencies::dsl::*;
use cambio_core::currencies::{CurrencyDescriptor, CurrencyStore};
use cambio_core::errors::Result;

/// Diesel-backed currency directory store.
pub struct CurrencyRepository {
    pool: Arc<DbPool>,
}

impl CurrencyRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        CurrencyRepository { pool }
    }
}

#[async_trait]
impl CurrencyStore for CurrencyRepository {
    async fn list_all(&self) -> Result<Vec<CurrencyDescriptor>> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<CurrencyDB> = currencies
            .select(CurrencyDB::as_select())
            .order(code.asc())
            .load(&mut conn)
            .map_err(StorageError::from)?;

        let descriptors = rows
            .into_iter()
            .filter_map(|row| {
                let row_code = row.code.clone();
                let descriptor = row.into_descriptor();
                if descriptor.is_none() {
                    log::warn!("Skipping currency {} with unknown asset class", row_code);
                }
                descriptor
            })
            .collect();

        Ok(descriptors)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        // One trivial read; an empty table is still a healthy table.
        currencies
            .select(code)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use cambio_core::currencies::AssetClass;

    /// In-memory database: the pool is capped at one connection so every
    /// checkout sees the same migrated database.
    fn test_pool() -> Arc<DbPool> {
        let manager =
            diesel::r2d2::ConnectionManager::<diesel::SqliteConnection>::new(":memory:");
        let pool = diesel::r2d2::Pool::builder()
            .max_size(1)
            .build(manager)
            .unwrap();
        db::run_migrations(&pool).unwrap();
        Arc::new(pool)
    }

    #[tokio::test]
    async fn test_list_all_returns_seeded_directory_in_order() {
        let repository = CurrencyRepository::new(test_pool());

        let listed = repository.list_all().await.unwrap();

        assert_eq!(listed.len(), 11);
        let codes: Vec<&str> = listed.iter().map(|c| c.code.as_str()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);

        let btc = listed.iter().find(|c| c.code == "BTC").unwrap();
        assert_eq!(btc.asset_class, AssetClass::Crypto);
        let brl = listed.iter().find(|c| c.code == "BRL").unwrap();
        assert_eq!(brl.asset_class, AssetClass::Fiat);
    }

    #[tokio::test]
    async fn test_ping_succeeds_on_migrated_database() {
        let repository = CurrencyRepository::new(test_pool());
        repository.ping().await.unwrap();
    }
}
