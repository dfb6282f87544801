use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{NaiveDate, Utc};
use stockledger_infra::StockReconciler;
use stockledger_inventory::StockItem;
use stockledger_products::{Product, ProductDetails};
use stockledger_receipts::{Receipt, ReceiptLineItem};

/// Catalog of `n` products, each with one unit on hand.
fn seeded(n: usize) -> (Vec<Product>, Vec<StockItem>) {
    let now = Utc::now();
    let catalog: Vec<Product> = (0..n)
        .map(|i| Product::new(format!("Product {i}"), format!("{i:013}"), now))
        .collect();
    let ledger = catalog
        .iter()
        .map(|p| StockItem::single(p.id_typed(), now))
        .collect();
    (catalog, ledger)
}

fn bench_register_barcode(c: &mut Criterion) {
    let mut group = c.benchmark_group("register_barcode");
    let reconciler = StockReconciler::default();

    for size in [10usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("known_barcode_last", size), &size, |b, &size| {
            let (mut catalog, mut ledger) = seeded(size);
            let barcode = format!("{:013}", size - 1);
            b.iter(|| {
                reconciler.register_barcode(
                    black_box(&barcode),
                    ProductDetails::default(),
                    &mut catalog,
                    &mut ledger,
                )
            });
        });
    }

    group.finish();
}

fn bench_ingest_receipt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest_receipt");
    let reconciler = StockReconciler::default();
    let purchase_date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

    for lines in [5usize, 50] {
        let receipt = Receipt::new(
            "bench",
            purchase_date,
            (0..lines)
                .map(|i| ReceiptLineItem::new(format!("PRODUCT {i}"), 2.5))
                .collect(),
            Utc::now(),
        );

        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::new("matched_lines", lines), &receipt, |b, receipt| {
            let (mut catalog, mut ledger) = seeded(500);
            b.iter(|| reconciler.ingest_receipt(black_box(receipt), &mut catalog, &mut ledger));
        });
    }

    group.finish();
}

fn bench_remove_barcode(c: &mut Criterion) {
    let reconciler = StockReconciler::default();

    c.bench_function("remove_then_register_roundtrip", |b| {
        let (mut catalog, mut ledger) = seeded(200);
        let barcode = format!("{:013}", 100);
        b.iter(|| {
            reconciler.register_barcode(&barcode, ProductDetails::default(), &mut catalog, &mut ledger);
            reconciler.remove_barcode(black_box(&barcode), &catalog, &mut ledger)
        });
    });
}

criterion_group!(
    benches,
    bench_register_barcode,
    bench_ingest_receipt,
    bench_remove_barcode
);
criterion_main!(benches);
