//! Receipts module (parsed purchase receipts).
//!
//! Receipts arrive already parsed from an external OCR/QR collaborator. This
//! crate only describes their shape and how line quantities turn into whole
//! stock units.

pub mod receipt;

pub use receipt::{Receipt, ReceiptLineItem};
