use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use cambio_core::currencies::{CurrencyService, CurrencyServiceTrait, CurrencyStore};
use cambio_core::health::{HealthService, HealthServiceTrait};
use cambio_core::quotes::QuoteResolver;
use cambio_core::rates::{RateService, RateServiceTrait};
use cambio_market_data::{PriceProvider, YahooProvider};
use cambio_storage_sqlite::{db, CurrencyRepository};

pub struct AppState {
    pub rate_service: Arc<dyn RateServiceTrait>,
    pub health_service: Arc<dyn HealthServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("CAMBIO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let currency_store: Arc<dyn CurrencyStore> = Arc::new(CurrencyRepository::new(pool));

    let currency_service: Arc<dyn CurrencyServiceTrait> = Arc::new(CurrencyService::new(
        currency_store.clone(),
        config.directory_ttl,
    ));

    let provider: Arc<dyn PriceProvider> = Arc::new(YahooProvider::new()?);
    let resolver = Arc::new(QuoteResolver::new(provider, config.quote_timeout));

    let rate_service: Arc<dyn RateServiceTrait> =
        Arc::new(RateService::new(currency_service.clone(), resolver));

    let health_service: Arc<dyn HealthServiceTrait> =
        Arc::new(HealthService::new(currency_store));

    Ok(Arc::new(AppState {
        rate_service,
        health_service,
    }))
}
