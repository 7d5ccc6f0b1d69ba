use std::sync::Arc;

use catalog_infra::read_model::CatalogStore;

/// Shared handles available to every handler.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<dyn CatalogStore>,
}

impl AppServices {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &dyn CatalogStore {
        self.catalog.as_ref()
    }
}

impl core::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppServices")
            .field("products", &self.catalog.len())
            .finish()
    }
}
