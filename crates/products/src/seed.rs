use catalog_core::ProductId;

use crate::product::{Product, Variant};

/// Catalog contents at process start: one air conditioner in two voltages.
pub fn seed_catalog() -> Vec<Product> {
    vec![
        Product::new(ProductId::new(1), "Ar condicionado", "Ar condicionado")
            .with_variant(Variant::new("CODIGO001", 179.99, 55, "voltage", "110V"))
            .with_variant(Variant::new("CODIGO002", 239.99, 45, "voltage", "220V")),
    ]
}
