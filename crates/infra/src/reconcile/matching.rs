//! Catalog and ledger lookups.
//!
//! Barcode and name matching stay separate: barcodes are unique per product,
//! names are not guaranteed to be, and only the receipt path matches by name.

use stockledger_core::ProductId;
use stockledger_inventory::StockItem;
use stockledger_products::Product;

use crate::store::Collection;

/// Exact barcode match.
pub fn find_by_barcode<C>(catalog: &C, barcode: &str) -> Option<Product>
where
    C: Collection<Product> + ?Sized,
{
    catalog.find(&|p: &Product| p.has_barcode(barcode))
}

/// Case-insensitive exact name match; first match in catalog order wins.
pub fn find_by_name<C>(catalog: &C, name: &str) -> Option<Product>
where
    C: Collection<Product> + ?Sized,
{
    catalog.find(&|p: &Product| p.name_matches(name))
}

/// The ledger entry for `product_id`, if the product has stock.
pub fn find_stock<L>(ledger: &L, product_id: ProductId) -> Option<StockItem>
where
    L: Collection<StockItem> + ?Sized,
{
    ledger.find(&|item: &StockItem| item.belongs_to(product_id))
}
