//! Inventory domain module (stock ledger entries).
//!
//! This crate contains the per-product stock record and its quantity rules,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod item;

pub use item::StockItem;
