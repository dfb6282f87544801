//! Reconciler configuration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockledger_core::{DomainError, DomainResult};

/// Environment variable overriding [`ReconcilerConfig::unnamed_product_prefix`].
pub const UNNAMED_PRODUCT_PREFIX_ENV: &str = "STOCKLEDGER_UNNAMED_PRODUCT_PREFIX";
/// Environment variable overriding [`ReconcilerConfig::placeholder_barcode_prefix`].
pub const PLACEHOLDER_PREFIX_ENV: &str = "STOCKLEDGER_PLACEHOLDER_PREFIX";

const DEFAULT_UNNAMED_PRODUCT_PREFIX: &str = "Product";
const DEFAULT_PLACEHOLDER_BARCODE_PREFIX: &str = "NO_BARCODE_";

/// Labels the reconciler uses when it has to invent product fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// Name given to a barcode-registered product when none is supplied,
    /// rendered as `"<prefix> <barcode>"`.
    pub unnamed_product_prefix: String,
    /// Prefix of the synthetic barcode given to receipt-only products.
    pub placeholder_barcode_prefix: String,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            unnamed_product_prefix: DEFAULT_UNNAMED_PRODUCT_PREFIX.to_string(),
            placeholder_barcode_prefix: DEFAULT_PLACEHOLDER_BARCODE_PREFIX.to_string(),
        }
    }
}

impl ReconcilerConfig {
    /// Load from the process environment, falling back to defaults.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` as the variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let defaults = Self::default();
        let config = Self {
            unnamed_product_prefix: lookup(UNNAMED_PRODUCT_PREFIX_ENV)
                .unwrap_or(defaults.unnamed_product_prefix),
            placeholder_barcode_prefix: lookup(PLACEHOLDER_PREFIX_ENV)
                .unwrap_or(defaults.placeholder_barcode_prefix),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.unnamed_product_prefix.trim().is_empty() {
            return Err(DomainError::validation("unnamed product prefix cannot be empty"));
        }
        if self.placeholder_barcode_prefix.trim().is_empty() {
            return Err(DomainError::validation("placeholder barcode prefix cannot be empty"));
        }
        Ok(())
    }

    /// Synthetic name for a product first seen by barcode alone.
    pub fn unnamed_product_name(&self, barcode: &str) -> String {
        format!("{} {}", self.unnamed_product_prefix, barcode)
    }

    /// Fresh placeholder barcode for a product that only ever appeared on receipts.
    ///
    /// Uniqueness relies on UUIDv4 randomness; the catalog is not re-checked.
    pub fn placeholder_barcode(&self) -> String {
        format!("{}{}", self.placeholder_barcode_prefix, Uuid::new_v4())
    }
}
