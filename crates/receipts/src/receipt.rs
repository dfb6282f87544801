use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use stockledger_core::ReceiptId;

/// Receipt line item as printed on the receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLineItem {
    pub product_name: String,
    /// May be fractional (e.g. `0.5` kg).
    pub quantity: f64,
    /// Passthrough only; not used for stock.
    #[serde(default)]
    pub unit_price: Option<f64>,
}

impl ReceiptLineItem {
    pub fn new(product_name: impl Into<String>, quantity: f64) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            unit_price: None,
        }
    }

    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    /// Whole stock units for this line: truncated toward zero, never rounded.
    ///
    /// Non-finite quantities (NaN, infinities) count as zero units.
    pub fn stock_units(&self) -> i64 {
        if !self.quantity.is_finite() {
            return 0;
        }
        self.quantity.trunc() as i64
    }
}

/// A parsed purchase receipt. Input only; reconciliation never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(default)]
    pub id: ReceiptId,
    /// Raw scan payload (QR code contents) the receipt was parsed from.
    #[serde(default)]
    pub raw_payload: String,
    pub purchase_date: NaiveDate,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default = "Utc::now")]
    pub processed_at: DateTime<Utc>,
    pub line_items: Vec<ReceiptLineItem>,
}

impl Receipt {
    pub fn new(
        raw_payload: impl Into<String>,
        purchase_date: NaiveDate,
        line_items: Vec<ReceiptLineItem>,
        processed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ReceiptId::new(),
            raw_payload: raw_payload.into(),
            purchase_date,
            store_name: None,
            processed_at,
            line_items,
        }
    }

    pub fn with_store_name(mut self, store_name: impl Into<String>) -> Self {
        self.store_name = Some(store_name.into());
        self
    }

    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purchase_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    #[test]
    fn stock_units_truncate_toward_zero() {
        assert_eq!(ReceiptLineItem::new("A", 2.9).stock_units(), 2);
        assert_eq!(ReceiptLineItem::new("A", 1.0).stock_units(), 1);
        assert_eq!(ReceiptLineItem::new("A", 0.5).stock_units(), 0);
        assert_eq!(ReceiptLineItem::new("A", -1.7).stock_units(), -1);
    }

    #[test]
    fn stock_units_treat_non_finite_as_zero() {
        assert_eq!(ReceiptLineItem::new("A", f64::NAN).stock_units(), 0);
        assert_eq!(ReceiptLineItem::new("A", f64::INFINITY).stock_units(), 0);
        assert_eq!(ReceiptLineItem::new("A", f64::NEG_INFINITY).stock_units(), 0);
    }

    #[test]
    fn unit_price_is_passthrough() {
        let line = ReceiptLineItem::new("Rice", 1.0).with_unit_price(4.99);
        assert_eq!(line.unit_price, Some(4.99));
        assert_eq!(line.stock_units(), 1);
    }

    #[test]
    fn new_receipt_keeps_line_order() {
        let receipt = Receipt::new(
            "qr-payload",
            purchase_date(),
            vec![ReceiptLineItem::new("B", 1.0), ReceiptLineItem::new("A", 2.0)],
            Utc::now(),
        )
        .with_store_name("Corner Market");

        assert_eq!(receipt.len(), 2);
        assert!(!receipt.is_empty());
        assert_eq!(receipt.line_items[0].product_name, "B");
        assert_eq!(receipt.line_items[1].product_name, "A");
        assert_eq!(receipt.store_name.as_deref(), Some("Corner Market"));
    }

    #[test]
    fn minimal_json_receipt_gets_generated_id() {
        let json = r#"{
            "purchase_date": "2024-05-10",
            "line_items": [{ "product_name": "Milk", "quantity": 2.0 }]
        }"#;
        let a: Receipt = serde_json::from_str(json).unwrap();
        let b: Receipt = serde_json::from_str(json).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.purchase_date, purchase_date());
        assert_eq!(a.line_items[0].unit_price, None);
        assert!(a.store_name.is_none());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: truncation matches the integer part for every finite quantity.
            #[test]
            fn stock_units_equal_integer_part(whole in -1_000i64..1_000, frac in 0.0f64..0.999) {
                let quantity = if whole < 0 { whole as f64 - frac } else { whole as f64 + frac };
                prop_assert_eq!(ReceiptLineItem::new("X", quantity).stock_units(), whole);
            }
        }
    }
}
