use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::health_model::HealthReport;
use crate::currencies::CurrencyStore;

#[async_trait]
pub trait HealthServiceTrait: Send + Sync {
    /// Run the liveness probe. Never fails; a broken store produces an
    /// error-shaped report instead.
    async fn check(&self) -> HealthReport;
}

/// Liveness probe against the currency directory store.
///
/// Not part of the rate-computation path; it exists for operational
/// visibility and shares nothing with the request flow except the store.
pub struct HealthService {
    store: Arc<dyn CurrencyStore>,
}

impl HealthService {
    pub fn new(store: Arc<dyn CurrencyStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn check(&self) -> HealthReport {
        match self.store.ping().await {
            Ok(()) => HealthReport::ok(Utc::now().timestamp()),
            Err(e) => {
                log::error!("Health probe failed: {}", e);
                HealthReport::error(e.to_string())
            }
        }
    }
}
