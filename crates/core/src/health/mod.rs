pub mod health_model;
pub mod health_service;

pub use health_model::HealthReport;
pub use health_service::{HealthService, HealthServiceTrait};
