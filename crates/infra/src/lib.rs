//! `stockledger-infra`: storage seam and the stock reconciler.
//!
//! The reconciler is the only component with decision logic: it matches
//! scanned barcodes and receipt lines against the catalog and keeps the stock
//! ledger consistent with it.

pub mod config;
pub mod reconcile;
pub mod store;

pub use config::ReconcilerConfig;
pub use reconcile::{ReceiptLineOutcome, Reconciled, Removal, StockReconciler};
pub use store::Collection;
