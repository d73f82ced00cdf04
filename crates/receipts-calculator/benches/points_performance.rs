use criterion::{Criterion, black_box, criterion_group, criterion_main};
use receipts_calculator::PointsCalculator;
use receipts_types::{Item, Receipt};

fn create_sample_receipt(item_count: usize) -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-21".to_string(),
        purchase_time: "14:33".to_string(),
        items: (0..item_count)
            .map(|i| Item::new(format!("Item number {}", i), format!("{}.{:02}", i % 50, i % 100)))
            .collect(),
        total: "123.75".to_string(),
    }
}

fn bench_score_single_receipt(c: &mut Criterion) {
    let calculator = PointsCalculator::new();
    let receipt = create_sample_receipt(5);

    c.bench_function("score_single_receipt", |b| {
        b.iter(|| black_box(calculator.score(black_box(&receipt))));
    });
}

fn bench_score_large_receipt(c: &mut Criterion) {
    let calculator = PointsCalculator::new();
    let receipt = create_sample_receipt(1_000);

    c.bench_function("score_large_receipt", |b| {
        b.iter(|| black_box(calculator.score(black_box(&receipt))));
    });
}

fn bench_breakdown(c: &mut Criterion) {
    let calculator = PointsCalculator::new();
    let receipt = create_sample_receipt(5);

    c.bench_function("breakdown_single_receipt", |b| {
        b.iter(|| black_box(calculator.breakdown(black_box(&receipt))));
    });
}

criterion_group!(benches, bench_score_single_receipt, bench_score_large_receipt, bench_breakdown);
criterion_main!(benches);
