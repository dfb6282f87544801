use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use stockledger_core::{DomainError, DomainResult, Entity};
use stockledger_infra::{ReceiptLineOutcome, Reconciled, Removal, StockReconciler};
use stockledger_inventory::StockItem;
use stockledger_products::{Product, ProductDetails};
use stockledger_receipts::Receipt;

/// One scripted operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Register {
        barcode: String,
        #[serde(flatten)]
        details: ProductDetails,
    },
    Ingest(Receipt),
    Remove {
        barcode: String,
    },
}

/// Starting catalog/ledger plus the operations to replay over them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub catalog: Vec<Product>,
    #[serde(default)]
    pub ledger: Vec<StockItem>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the seeded collections satisfy what reconciliation assumes.
    pub fn validate(&self) -> DomainResult<()> {
        let mut barcodes = HashSet::new();
        let mut product_ids = HashSet::new();
        for product in &self.catalog {
            if !product_ids.insert(product.id()) {
                return Err(DomainError::invariant(format!("duplicate product id {}", product.id())));
            }
            if !barcodes.insert(product.barcode()) {
                return Err(DomainError::invariant(format!(
                    "duplicate barcode {}",
                    product.barcode()
                )));
            }
        }

        let mut stocked = HashSet::new();
        for item in &self.ledger {
            if !product_ids.contains(&item.product_id()) {
                return Err(DomainError::invariant(format!(
                    "stock item {} references unknown product {}",
                    item.id(),
                    item.product_id()
                )));
            }
            if !stocked.insert(item.product_id()) {
                return Err(DomainError::invariant(format!(
                    "product {} has more than one stock item",
                    item.product_id()
                )));
            }
            if item.quantity() <= 0 {
                return Err(DomainError::invariant(format!(
                    "stock item {} has non-positive quantity {}",
                    item.id(),
                    item.quantity()
                )));
            }
        }
        Ok(())
    }
}

/// What one step did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepReport {
    Registered(Reconciled),
    Ingested(Vec<ReceiptLineOutcome>),
    Removed(Removal),
}

/// Replay result: per-step outcomes plus the final collections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub steps: Vec<StepReport>,
    pub catalog: Vec<Product>,
    pub ledger: Vec<StockItem>,
}

/// Run every step of `script` through `reconciler`, in order.
pub fn replay(script: Script, reconciler: &StockReconciler) -> DomainResult<Report> {
    script.validate()?;

    let Script {
        mut catalog,
        mut ledger,
        steps,
    } = script;

    let mut reports = Vec::with_capacity(steps.len());
    for (index, step) in steps.into_iter().enumerate() {
        tracing::debug!("replaying step {}", index);
        let report = match step {
            Step::Register { barcode, details } => StepReport::Registered(
                reconciler.register_barcode(&barcode, details, &mut catalog, &mut ledger),
            ),
            Step::Ingest(receipt) => {
                StepReport::Ingested(reconciler.ingest_receipt(&receipt, &mut catalog, &mut ledger))
            }
            Step::Remove { barcode } => {
                StepReport::Removed(reconciler.remove_barcode(&barcode, &catalog, &mut ledger))
            }
        };
        reports.push(report);
    }

    tracing::info!(
        "replayed {} step(s): {} product(s), {} stock item(s)",
        reports.len(),
        catalog.len(),
        ledger.len()
    );

    Ok(Report {
        steps: reports,
        catalog,
        ledger,
    })
}
