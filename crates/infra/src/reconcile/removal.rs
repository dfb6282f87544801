use stockledger_inventory::StockItem;
use stockledger_products::Product;

use super::matching::{find_by_barcode, find_stock};
use super::{Removal, StockReconciler, settle};
use crate::store::Collection;

impl StockReconciler {
    /// Take one unit of `barcode` out of stock.
    ///
    /// The catalog is only read. The product's own `updated_at` is left as is;
    /// only the ledger entry is re-stamped.
    pub fn remove_barcode<C, L>(&self, barcode: &str, catalog: &C, ledger: &mut L) -> Removal
    where
        C: Collection<Product> + ?Sized,
        L: Collection<StockItem> + ?Sized,
    {
        let Some(product) = find_by_barcode(catalog, barcode) else {
            tracing::debug!("remove: barcode {} is not in the catalog", barcode);
            return Removal::UnknownProduct;
        };

        let Some(current) = find_stock(ledger, product.id_typed()) else {
            tracing::debug!("remove: product {} has no stock", product.id_typed());
            return Removal::NoStock;
        };

        let now = self.now();
        match settle(ledger, &current, current.adjusted(-1, now)) {
            Some(item) => Removal::Decremented(item),
            None => Removal::Depleted(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::reconcile::Removal;
    use crate::reconcile::test_support::*;
    use stockledger_core::Entity;
    use stockledger_inventory::StockItem;
    use stockledger_products::{Product, ProductDetails};

    #[test]
    fn decrements_when_more_than_one_unit_remains() {
        let product = Product::new("Soap", "444", t0());
        let item = StockItem::new(product.id_typed(), 3, t0()).unwrap();
        let catalog = vec![product.clone()];
        let mut ledger = vec![item.clone()];

        let out = reconciler().remove_barcode("444", &catalog, &mut ledger);

        let survivor = out.surviving().unwrap();
        assert_eq!(survivor.id(), item.id());
        assert_eq!(survivor.quantity(), 2);
        assert_eq!(survivor.updated_at(), t1());
        assert_eq!(survivor.added_at(), t0());
        assert_eq!(ledger, vec![survivor.clone()]);
    }

    #[test]
    fn last_unit_removes_the_entry() {
        let product = Product::new("Soap", "X", t0());
        let item = StockItem::single(product.id_typed(), t0());
        let catalog = vec![product.clone()];
        let mut ledger = vec![item.clone()];

        let out = reconciler().remove_barcode("X", &catalog, &mut ledger);

        assert_eq!(out, Removal::Depleted(item));
        assert!(out.surviving().is_none());
        assert!(ledger.is_empty());
        assert_eq!(catalog, vec![product]);
    }

    #[test]
    fn product_timestamp_is_left_untouched() {
        let product = Product::new("Soap", "444", t0());
        let catalog = vec![product.clone()];
        let mut ledger = vec![StockItem::new(product.id_typed(), 2, t0()).unwrap()];

        reconciler().remove_barcode("444", &catalog, &mut ledger);
        reconciler().remove_barcode("444", &catalog, &mut ledger);

        assert_eq!(catalog[0].updated_at(), t0());
    }

    #[test]
    fn unknown_barcode_on_empty_collections_changes_nothing() {
        let catalog: Vec<Product> = Vec::new();
        let mut ledger: Vec<StockItem> = Vec::new();

        let out = reconciler().remove_barcode("000", &catalog, &mut ledger);

        assert_eq!(out, Removal::UnknownProduct);
        assert!(catalog.is_empty());
        assert!(ledger.is_empty());
    }

    #[test]
    fn known_product_without_stock_is_absent() {
        let product = Product::new("Soap", "555", t0());
        let other = Product::new("Salt", "666", t0());
        let other_item = StockItem::single(other.id_typed(), t0());
        let catalog = vec![product, other];
        let mut ledger = vec![other_item.clone()];

        let out = reconciler().remove_barcode("555", &catalog, &mut ledger);

        assert_eq!(out, Removal::NoStock);
        assert_eq!(ledger, vec![other_item]);
    }

    #[test]
    fn register_then_remove_returns_to_empty_ledger() {
        let r = reconciler();
        let mut catalog: Vec<Product> = Vec::new();
        let mut ledger: Vec<StockItem> = Vec::new();

        r.register_barcode("321", ProductDetails::named("Juice"), &mut catalog, &mut ledger);
        r.register_barcode("321", ProductDetails::default(), &mut catalog, &mut ledger);

        assert_eq!(r.remove_barcode("321", &catalog, &mut ledger).surviving().map(|i| i.quantity()), Some(1));
        assert!(matches!(r.remove_barcode("321", &catalog, &mut ledger), Removal::Depleted(_)));
        assert_eq!(r.remove_barcode("321", &catalog, &mut ledger), Removal::NoStock);
        assert_eq!(catalog.len(), 1);
        assert!(ledger.is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: k removals from n units leave n - k, and the entry disappears at zero.
            #[test]
            fn removals_walk_down_to_zero(start in 1i64..30, removals in 0i64..40) {
                let product = Product::new("P", "B", t0());
                let catalog = vec![product.clone()];
                let mut ledger = vec![StockItem::new(product.id_typed(), start, t0()).unwrap()];
                let r = reconciler();

                for _ in 0..removals {
                    r.remove_barcode("B", &catalog, &mut ledger);
                }

                let remaining = start - removals;
                if remaining > 0 {
                    prop_assert_eq!(ledger.len(), 1);
                    prop_assert_eq!(ledger[0].quantity(), remaining);
                } else {
                    prop_assert!(ledger.is_empty());
                }
                prop_assert_eq!(catalog.len(), 1);
            }
        }
    }
}
