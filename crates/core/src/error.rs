//! Catalog error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used by catalog store operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Lookups are the only thing that can fail inside the store; decoding and
/// transport failures are classified by the HTTP layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The lookup target does not exist.
    #[error("{0} not found")]
    NotFound(Missing),
}

/// Which lookup target was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    Product(ProductId),
    /// The product exists but holds no variant with this code.
    Variant { product_id: ProductId, sku: String },
}

impl core::fmt::Display for Missing {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Missing::Product(id) => write!(f, "product {id}"),
            Missing::Variant { product_id, sku } => {
                write!(f, "sku {sku} of product {product_id}")
            }
        }
    }
}

impl CatalogError {
    pub fn product_not_found(id: ProductId) -> Self {
        Self::NotFound(Missing::Product(id))
    }

    pub fn variant_not_found(product_id: ProductId, sku: impl Into<String>) -> Self {
        Self::NotFound(Missing::Variant {
            product_id,
            sku: sku.into(),
        })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The absent target, for logging at the boundary.
    pub fn missing(&self) -> &Missing {
        match self {
            Self::NotFound(m) => m,
        }
    }
}
