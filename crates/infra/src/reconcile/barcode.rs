use stockledger_inventory::StockItem;
use stockledger_products::{Product, ProductDetails};

use super::matching::{find_by_barcode, find_stock};
use super::{Reconciled, StockReconciler, settle, write_back};
use crate::store::Collection;

impl StockReconciler {
    /// Register one scanned unit of `barcode`.
    ///
    /// A known barcode gets its stock incremented by exactly one (or a new
    /// single-unit entry if it had none). An unknown barcode creates the
    /// product from `details` plus a single-unit entry. `details` is ignored
    /// whenever the barcode is already in the catalog.
    pub fn register_barcode<C, L>(
        &self,
        barcode: &str,
        details: ProductDetails,
        catalog: &mut C,
        ledger: &mut L,
    ) -> Reconciled
    where
        C: Collection<Product> + ?Sized,
        L: Collection<StockItem> + ?Sized,
    {
        let now = self.now();

        let Some(existing) = find_by_barcode(catalog, barcode) else {
            let name = details
                .name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| self.config.unnamed_product_name(barcode));
            let product = Product::new(name, barcode, now)
                .with_brand(details.brand)
                .with_unit(details.unit);
            catalog.add(product.clone());

            let item = StockItem::single(product.id_typed(), now);
            ledger.add(item.clone());

            tracing::debug!("registered new product {} for barcode {}", product.id_typed(), barcode);
            return Reconciled {
                product,
                item,
                product_created: true,
                item_created: true,
            };
        };

        let product = existing.touched(now);
        write_back(catalog, product.clone());

        let incremented = find_stock(ledger, product.id_typed())
            .and_then(|current| settle(ledger, &current, current.adjusted(1, now)));

        match incremented {
            Some(item) => {
                tracing::debug!("barcode {} now has {} unit(s) on hand", barcode, item.quantity());
                Reconciled {
                    product,
                    item,
                    product_created: false,
                    item_created: false,
                }
            }
            None => {
                let item = StockItem::single(product.id_typed(), now);
                ledger.add(item.clone());
                tracing::debug!("barcode {} restocked with a new ledger entry", barcode);
                Reconciled {
                    product,
                    item,
                    product_created: false,
                    item_created: true,
                }
            }
        }
    }
}
