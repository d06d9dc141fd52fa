pub mod currencies_errors;
pub mod currencies_model;
pub mod currencies_service;
pub mod currencies_traits;

pub use currencies_errors::DirectoryError;
pub use currencies_model::{AssetClass, CurrencyDescriptor, DirectorySnapshot};
pub use currencies_service::CurrencyService;
pub use currencies_traits::{CurrencyServiceTrait, CurrencyStore};
