//! Shared product catalog storage.

pub mod catalog_store;

pub use catalog_store::{CatalogStore, InMemoryCatalogStore};
