//! Stock reconciliation: keeps the catalog and the stock ledger in step.
//!
//! Every operation reads the collections fresh, decides between "update" and
//! "create", and writes new record snapshots back in place. Nothing here fails;
//! "not found" is always an absent result.

mod barcode;
pub mod matching;
mod receipt;
mod removal;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockledger_core::{Clock, Entity, SystemClock};
use stockledger_inventory::StockItem;
use stockledger_products::Product;

use crate::config::ReconcilerConfig;
use crate::store::Collection;

/// Post-update state of one barcode registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciled {
    pub product: Product,
    pub item: StockItem,
    pub product_created: bool,
    pub item_created: bool,
}

/// Post-update state for one receipt line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLineOutcome {
    /// Zero-based position of the line in the receipt.
    pub line_no: usize,
    pub product: Product,
    /// `None` when the line left the product without stock (a sub-unit quantity
    /// for a product with nothing on hand, or a negative line that emptied it).
    pub item: Option<StockItem>,
    pub product_created: bool,
}

/// Result of decrementing stock by barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub enum Removal {
    /// No product carries this barcode.
    UnknownProduct,
    /// The product exists but has nothing on hand.
    NoStock,
    /// The last unit was taken; the ledger entry was deleted.
    Depleted(StockItem),
    /// One unit was taken; the updated entry is still in the ledger.
    Decremented(StockItem),
}

impl Removal {
    /// The ledger entry that is still present after the call, if any.
    pub fn surviving(&self) -> Option<&StockItem> {
        match self {
            Removal::Decremented(item) => Some(item),
            _ => None,
        }
    }

    pub fn into_surviving(self) -> Option<StockItem> {
        match self {
            Removal::Decremented(item) => Some(item),
            _ => None,
        }
    }
}

/// The stock reconciler.
///
/// Holds only configuration and a clock; the catalog and ledger are owned by
/// the caller and borrowed mutably per call. Callers sharing them across
/// threads must guard both with one lock, since a single call may touch both.
#[derive(Clone)]
pub struct StockReconciler {
    config: ReconcilerConfig,
    clock: Arc<dyn Clock>,
}

impl StockReconciler {
    pub fn new(config: ReconcilerConfig) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

impl Default for StockReconciler {
    fn default() -> Self {
        Self::new(ReconcilerConfig::default())
    }
}

impl core::fmt::Debug for StockReconciler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StockReconciler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Write a newer snapshot over the stored record with the same id.
fn write_back<T, S>(store: &mut S, record: T)
where
    T: Entity,
    S: Collection<T> + ?Sized,
{
    let id = record.id();
    if !store.replace(record) {
        tracing::warn!("record {:?} disappeared before write-back; skipped", id);
    }
}

/// Store `next` over `current`, or delete `current` when the zero floor was hit.
fn settle<L>(ledger: &mut L, current: &StockItem, next: Option<StockItem>) -> Option<StockItem>
where
    L: Collection<StockItem> + ?Sized,
{
    match next {
        Some(item) => {
            write_back(ledger, item.clone());
            Some(item)
        }
        None => {
            ledger.remove_by_id(current.id());
            tracing::debug!(
                "stock item {} for product {} reached zero and was removed",
                current.id(),
                current.product_id()
            );
            None
        }
    }
}
