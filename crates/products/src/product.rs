use serde::{Deserialize, Deserializer, Serialize};

use catalog_core::ProductId;

/// Decode an explicit `null` as the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `null` list and `null` entries both become zero values.
fn variants_or_default<'de, D>(deserializer: D) -> Result<Vec<Variant>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Option<Variant>>>::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// A purchasable configuration of a product (one "sku").
///
/// Every field defaults when absent from the payload or sent as `null`, so a
/// replacement that omits a field stores that field's zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variant {
    #[serde(deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64, // no currency, no sign/precision checks
    #[serde(deserialize_with = "null_as_default")]
    pub stock: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub variation_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub variation_value: String,
}

impl Variant {
    pub fn new(
        sku: impl Into<String>,
        price: f64,
        stock: i64,
        variation_type: impl Into<String>,
        variation_value: impl Into<String>,
    ) -> Self {
        Self {
            sku: sku.into(),
            price,
            stock,
            variation_type: variation_type.into(),
            variation_value: variation_value.into(),
        }
    }
}

/// Catalog entry: identifier, descriptive text and its variants in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub id: ProductId,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "variants_or_default")]
    pub skus: Vec<Variant>,
}

impl Product {
    pub fn new(id: ProductId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            skus: Vec::new(),
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.skus.push(variant);
        self
    }

    /// First variant whose code equals `sku` exactly.
    pub fn variant(&self, sku: &str) -> Option<&Variant> {
        self.skus.iter().find(|v| v.sku == sku)
    }

    pub fn variant_mut(&mut self, sku: &str) -> Option<&mut Variant> {
        self.skus.iter_mut().find(|v| v.sku == sku)
    }
}
