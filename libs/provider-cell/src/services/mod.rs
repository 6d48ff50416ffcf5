pub mod browser;
pub mod catalog;

pub use browser::{filter_by_specialty, sort_providers, specialty_options};
pub use catalog::{CatalogLoad, ProviderCatalog};
