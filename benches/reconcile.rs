// benches/reconcile.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use price_watch::engine;
use price_watch::record::Record;

fn synth_history(products: usize, runs: usize) -> Vec<Record> {
    let mut rows = Vec::with_capacity(products * runs);
    for run in 0..runs {
        for p in 0..products {
            let ts = format!("2024-01-{:02} 12:00:00", run + 1);
            rows.push(Record::new(
                Record::parse_timestamp(&ts),
                format!("Product {p}"),
                format!("$ {}.99", 100 + (p * 7 + run * 3) % 900),
                "4.4 out of 5 stars".to_string(),
                format!("https://example.com/dp/B{:09}", p),
            ));
        }
    }
    rows
}

fn synth_batch(products: usize) -> Vec<Record> {
    (0..products)
        .map(|p| {
            Record::new(
                Record::parse_timestamp("2024-02-01 12:00:00"),
                format!("Product {p}"),
                if p % 3 == 0 {
                    "Not Available".to_string()
                } else {
                    format!("$ {}.49", 90 + (p * 5) % 900)
                },
                "4.4 out of 5 stars".to_string(),
                format!("https://example.com/dp/B{:09}", p),
            )
        })
        .collect()
}

fn bench_reconcile(c: &mut Criterion) {
    let history = synth_history(500, 20); // 10k rows, 500 links
    let batch = synth_batch(500);

    c.bench_function("latest_index_10k", |b| {
        b.iter(|| engine::latest_index(black_box(&history)).len())
    });

    c.bench_function("reconcile_500_vs_10k", |b| {
        b.iter(|| {
            let out = engine::reconcile(black_box(batch.clone()), Some(black_box(&history)));
            black_box(out.alerts.len())
        })
    });
}

criterion_group!(benches, bench_reconcile);
criterion_main!(benches);
