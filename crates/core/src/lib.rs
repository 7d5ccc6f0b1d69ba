//! `catalog-core` — shared catalog primitives.
//!
//! Identifiers and the error model used by the store and the HTTP layer
//! (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{CatalogError, CatalogResult, Missing};
pub use id::ProductId;
