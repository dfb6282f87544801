use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockledger_core::{Entity, ProductId};

/// Optional descriptive fields supplied alongside a scanned barcode.
///
/// Only used when the barcode is unknown and a new product gets registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub unit: Option<String>,
}

impl ProductDetails {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// Catalog record: Product.
///
/// Treated as an immutable snapshot. Transitions such as [`Product::touched`]
/// return a new value with the same `id`, which the owner writes back into the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    barcode: String,
    brand: Option<String>,
    unit: Option<String>,
    default_expiry_days: Option<u32>,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with a fresh identifier, stamped at `now`.
    pub fn new(name: impl Into<String>, barcode: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            barcode: barcode.into(),
            brand: None,
            unit: None,
            default_expiry_days: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_brand(mut self, brand: Option<String>) -> Self {
        self.brand = brand;
        self
    }

    pub fn with_unit(mut self, unit: Option<String>) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_default_expiry_days(mut self, days: Option<u32>) -> Self {
        self.default_expiry_days = days;
        self
    }

    pub fn with_image_url(mut self, url: Option<String>) -> Self {
        self.image_url = url;
        self
    }

    /// Snapshot with `updated_at` refreshed; identity and attributes unchanged.
    pub fn touched(&self, now: DateTime<Utc>) -> Self {
        Self {
            updated_at: now,
            ..self.clone()
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn default_expiry_days(&self) -> Option<u32> {
        self.default_expiry_days
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Exact barcode equality.
    pub fn has_barcode(&self, barcode: &str) -> bool {
        self.barcode == barcode
    }

    /// Case-insensitive exact name equality (Unicode-aware lowercasing).
    pub fn name_matches(&self, name: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
