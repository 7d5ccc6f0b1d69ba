use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::{CatalogError, CatalogResult, ProductId};
use catalog_products::{Product, Variant};

/// Concurrency-safe product catalog.
///
/// Every operation observes or mutates the whole collection atomically: a
/// reader never sees a half-applied write, and `list_all` returns an owned
/// snapshot that later writes cannot change. Lookups are exact-match and
/// return the first hit in catalog order; duplicate ids and sku codes are
/// tolerated.
pub trait CatalogStore: Send + Sync {
    /// Snapshot of every product in catalog order.
    fn list_all(&self) -> Vec<Product>;

    /// First product whose id equals `id`.
    fn get_by_id(&self, id: ProductId) -> CatalogResult<Product>;

    /// Append `candidate` as-is, even if its id is already taken.
    fn insert(&self, candidate: Product) -> Product;

    /// Overwrite the first product matching `id` with `replacement`.
    ///
    /// The whole record is replaced, including the stored id, which becomes
    /// `replacement.id`.
    fn replace_by_id(&self, id: ProductId, replacement: Product) -> CatalogResult<Product>;

    /// Overwrite the first variant coded `sku` inside the first product
    /// matching `product_id`.
    ///
    /// Later products sharing the same id are not searched.
    fn replace_variant(
        &self,
        product_id: ProductId,
        sku: &str,
        replacement: Variant,
    ) -> CatalogResult<Variant>;

    /// Number of products currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn list_all(&self) -> Vec<Product> {
        (**self).list_all()
    }

    fn get_by_id(&self, id: ProductId) -> CatalogResult<Product> {
        (**self).get_by_id(id)
    }

    fn insert(&self, candidate: Product) -> Product {
        (**self).insert(candidate)
    }

    fn replace_by_id(&self, id: ProductId, replacement: Product) -> CatalogResult<Product> {
        (**self).replace_by_id(id, replacement)
    }

    fn replace_variant(
        &self,
        product_id: ProductId,
        sku: &str,
        replacement: Variant,
    ) -> CatalogResult<Variant> {
        (**self).replace_variant(product_id, sku, replacement)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory catalog guarded by a single lock around the whole sequence.
#[derive(Debug)]
pub struct InMemoryCatalogStore {
    inner: RwLock<Vec<Product>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            inner: RwLock::new(products),
        }
    }

    /// Store preloaded with the startup catalog.
    pub fn seeded() -> Self {
        Self::with_products(catalog_products::seed_catalog())
    }

    // Writers either finish a single assignment/push or never start, so the
    // data behind a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

fn position_of(products: &[Product], id: ProductId) -> Option<usize> {
    products.iter().position(|p| p.id == id)
}

impl CatalogStore for InMemoryCatalogStore {
    fn list_all(&self) -> Vec<Product> {
        self.read().clone()
    }

    fn get_by_id(&self, id: ProductId) -> CatalogResult<Product> {
        self.read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::product_not_found(id))
    }

    fn insert(&self, candidate: Product) -> Product {
        let mut products = self.write();
        products.push(candidate.clone());
        candidate
    }

    fn replace_by_id(&self, id: ProductId, replacement: Product) -> CatalogResult<Product> {
        let mut products = self.write();
        let idx = position_of(&products, id).ok_or_else(|| CatalogError::product_not_found(id))?;
        products[idx] = replacement.clone();
        Ok(replacement)
    }

    fn replace_variant(
        &self,
        product_id: ProductId,
        sku: &str,
        replacement: Variant,
    ) -> CatalogResult<Variant> {
        let mut products = self.write();
        let idx = position_of(&products, product_id)
            .ok_or_else(|| CatalogError::product_not_found(product_id))?;
        let slot = products[idx]
            .variant_mut(sku)
            .ok_or_else(|| CatalogError::variant_not_found(product_id, sku))?;
        *slot = replacement.clone();
        Ok(replacement)
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
