//! Products domain module (catalog records).
//!
//! This crate contains the catalog record and its snapshot transitions,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod product;

pub use product::{Product, ProductDetails};
