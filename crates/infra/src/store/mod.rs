//! Catalog / ledger storage abstractions.

pub mod collection;

pub use collection::Collection;
