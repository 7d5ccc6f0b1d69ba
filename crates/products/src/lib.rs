//! Products domain module.
//!
//! Plain catalog records (products and their sku variants) plus the seed
//! catalog loaded at startup. No IO, no HTTP, no storage.

pub mod product;
pub mod seed;

pub use product::{Product, Variant};
pub use seed::seed_catalog;
