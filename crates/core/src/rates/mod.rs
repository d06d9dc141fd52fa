pub mod rates_errors;
pub mod rates_model;
pub mod rates_service;
pub mod rates_traits;


pub use rates_errors::RatesError;
pub use rates_model::ConversionTable;
pub use rates_service::RateService;
pub use rates_traits::RateServiceTrait;
