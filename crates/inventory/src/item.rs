use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use stockledger_core::{DomainError, DomainResult, Entity, ProductId, ReceiptId, StockItemId};

/// Ledger record: quantity on hand for exactly one product.
///
/// Invariant: `quantity > 0` for as long as the record exists. Any change that
/// would bring it to zero or below yields no record at all (see
/// [`StockItem::adjusted`]), and the owner deletes the entry instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    id: StockItemId,
    product_id: ProductId,
    quantity: i64,
    purchase_date: Option<NaiveDate>,
    expiry_date: Option<NaiveDate>,
    source_receipt: Option<ReceiptId>,
    added_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StockItem {
    /// Create a ledger entry holding `quantity` units.
    pub fn new(product_id: ProductId, quantity: i64, now: DateTime<Utc>) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::invariant(format!(
                "stock quantity must be positive (got {quantity})"
            )));
        }
        Ok(Self {
            id: StockItemId::new(),
            product_id,
            quantity,
            purchase_date: None,
            expiry_date: None,
            source_receipt: None,
            added_at: now,
            updated_at: now,
        })
    }

    /// Create a ledger entry holding a single unit.
    pub fn single(product_id: ProductId, now: DateTime<Utc>) -> Self {
        Self {
            id: StockItemId::new(),
            product_id,
            quantity: 1,
            purchase_date: None,
            expiry_date: None,
            source_receipt: None,
            added_at: now,
            updated_at: now,
        }
    }

    pub fn with_purchase_date(mut self, date: Option<NaiveDate>) -> Self {
        self.purchase_date = date;
        self
    }

    pub fn with_expiry_date(mut self, date: Option<NaiveDate>) -> Self {
        self.expiry_date = date;
        self
    }

    pub fn with_source_receipt(mut self, receipt_id: Option<ReceiptId>) -> Self {
        self.source_receipt = receipt_id;
        self
    }

    /// Snapshot with `quantity + delta` and `updated_at = now`.
    ///
    /// Returns `None` when the result would be zero or negative; the entry must
    /// then be removed from the ledger.
    pub fn adjusted(&self, delta: i64, now: DateTime<Utc>) -> Option<Self> {
        let quantity = self.quantity.saturating_add(delta);
        if quantity <= 0 {
            return None;
        }
        Some(Self {
            quantity,
            updated_at: now,
            ..self.clone()
        })
    }

    /// Link this snapshot to the receipt that last changed its quantity.
    pub fn received_via(mut self, receipt_id: ReceiptId, purchase_date: NaiveDate) -> Self {
        self.source_receipt = Some(receipt_id);
        self.purchase_date = Some(purchase_date);
        self
    }

    pub fn id_typed(&self) -> StockItemId {
        self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn purchase_date(&self) -> Option<NaiveDate> {
        self.purchase_date
    }

    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry_date
    }

    pub fn source_receipt(&self) -> Option<ReceiptId> {
        self.source_receipt
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn belongs_to(&self, product_id: ProductId) -> bool {
        self.product_id == product_id
    }
}

impl Entity for StockItem {
    type Id = StockItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
