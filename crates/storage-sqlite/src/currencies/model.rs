use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::schema::currencies;
use cambio_core::currencies::{AssetClass, CurrencyDescriptor};

/// Database row for a listed currency.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = currencies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CurrencyDB {
    pub code: String,
    pub asset_class: String,
    pub created_at: NaiveDateTime,
}

impl CurrencyDB {
    /// Convert to the core descriptor. Rows with an asset class this
    /// build does not know are skipped by the caller.
    pub fn into_descriptor(self) -> Option<CurrencyDescriptor> {
        let asset_class = AssetClass::from_db_str(&self.asset_class)?;
        Some(CurrencyDescriptor {
            code: self.code,
            asset_class,
        })
    }
}
