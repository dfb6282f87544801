use chrono::{DateTime, Utc};

use stockledger_inventory::StockItem;
use stockledger_products::Product;
use stockledger_receipts::{Receipt, ReceiptLineItem};

use super::matching::{find_by_name, find_stock};
use super::{ReceiptLineOutcome, StockReconciler, settle, write_back};
use crate::store::Collection;

impl StockReconciler {
    /// Apply every line of `receipt`, in order.
    ///
    /// Returns exactly one outcome per line item. Lines are matched by
    /// case-insensitive product name and applied one after another, so a line
    /// can match a product created by an earlier line of the same receipt.
    pub fn ingest_receipt<C, L>(
        &self,
        receipt: &Receipt,
        catalog: &mut C,
        ledger: &mut L,
    ) -> Vec<ReceiptLineOutcome>
    where
        C: Collection<Product> + ?Sized,
        L: Collection<StockItem> + ?Sized,
    {
        let now = self.now();

        let mut outcomes = Vec::with_capacity(receipt.line_items.len());
        for (line_no, line) in receipt.line_items.iter().enumerate() {
            outcomes.push(self.ingest_line(receipt, line_no, line, now, catalog, ledger));
        }

        let created = outcomes.iter().filter(|o| o.product_created).count();
        tracing::info!(
            "ingested receipt {} from {}: {} line item(s), {} new product(s)",
            receipt.id,
            receipt.store_name.as_deref().unwrap_or("unknown store"),
            outcomes.len(),
            created
        );

        outcomes
    }

    fn ingest_line<C, L>(
        &self,
        receipt: &Receipt,
        line_no: usize,
        line: &ReceiptLineItem,
        now: DateTime<Utc>,
        catalog: &mut C,
        ledger: &mut L,
    ) -> ReceiptLineOutcome
    where
        C: Collection<Product> + ?Sized,
        L: Collection<StockItem> + ?Sized,
    {
        if !line.quantity.is_finite() {
            tracing::warn!(
                "receipt {} line {}: non-finite quantity for '{}' counts as zero",
                receipt.id,
                line_no,
                line.product_name
            );
        }
        let units = line.stock_units();

        let (product, product_created) = match find_by_name(catalog, &line.product_name) {
            Some(existing) => {
                let product = existing.touched(now);
                write_back(catalog, product.clone());
                (product, false)
            }
            None => {
                let product = Product::new(
                    line.product_name.clone(),
                    self.config.placeholder_barcode(),
                    now,
                );
                catalog.add(product.clone());
                (product, true)
            }
        };

        let item = match find_stock(ledger, product.id_typed()) {
            Some(current) => {
                let next = current
                    .adjusted(units, now)
                    .map(|item| item.received_via(receipt.id, receipt.purchase_date));
                settle(ledger, &current, next)
            }
            None => match StockItem::new(product.id_typed(), units, now) {
                Ok(item) => {
                    let item = item.received_via(receipt.id, receipt.purchase_date);
                    ledger.add(item.clone());
                    Some(item)
                }
                Err(err) => {
                    tracing::warn!(
                        "receipt {} line {}: no stock recorded for '{}': {}",
                        receipt.id,
                        line_no,
                        line.product_name,
                        err
                    );
                    None
                }
            },
        };

        tracing::debug!(
            "receipt {} line {}: '{}' -> product {} ({}), {} unit(s) applied",
            receipt.id,
            line_no,
            line.product_name,
            product.id_typed(),
            if product_created { "created" } else { "matched" },
            units
        );

        ReceiptLineOutcome {
            line_no,
            product,
            item,
            product_created,
        }
    }
}
