use std::sync::Arc;

use axum::{extract::State, Json};
use cambio_core::health::HealthReport;

use crate::main_lib::AppState;

/// Liveness probe. Always answers 200; a broken directory store shows up
/// as `status: "error"` in the body, never as a raised error.
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    Json(state.health_service.check().await)
}
