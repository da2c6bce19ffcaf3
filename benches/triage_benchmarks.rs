use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;
use triage::{accuracy, Optimizer, Tree};

// data generating
// functions
mod utils;
use utils::{create_records, symptoms};

pub fn tree_benchmarks(c: &mut Criterion) {
    let records = create_records(5_000, 12);
    let questions = symptoms(12);

    c.bench_function("fit depth 8", |b| {
        b.iter(|| Tree::fit(black_box(&records), black_box(&questions[..8])))
    });

    let tree = Tree::fit(&records, &questions[..8]);
    c.bench_function("accuracy depth 8", |b| {
        b.iter(|| accuracy(black_box(&tree), black_box(&records)))
    });

    c.bench_function("minimize depth 8", |b| {
        b.iter(|| {
            let mut t = tree.clone();
            t.minimize(black_box(true));
            t
        })
    });

    let mut search = c.benchmark_group("search");
    search.sample_size(10);
    search.measurement_time(Duration::from_secs(20));
    search.bench_function("search depth 3 sequential", |b| {
        b.iter(|| {
            Optimizer::default()
                .set_parallel(false)
                .search(black_box(&records[..1_000]), black_box(&questions), 3)
        })
    });
    search.bench_function("search depth 3 parallel", |b| {
        b.iter(|| Optimizer::default().search(black_box(&records[..1_000]), black_box(&questions), 3))
    });
    search.finish();
}

criterion_group!(benches, tree_benchmarks);
criterion_main!(benches);
