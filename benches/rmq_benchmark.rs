use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rmq_engine::{FischerHeunRmq, HybridRmq, PrecomputedRmq, SparseTableRmq};

mod common;

fn bench_rmq(b: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let mut group = b.benchmark_group("RMQ Benchmark: Randomized Input");
    group.plot_config(common::plot_config());

    for l in common::PRECOMPUTED_SIZES {
        let rmq = PrecomputedRmq::new(common::fill_random_vec(&mut rng, l));
        group.bench_with_input(BenchmarkId::new("precomputed", l), &l, |b, _| {
            b.iter_batched(
                || common::random_range(&mut rng, l),
                |e| black_box(rmq.rmq(e.0, e.1)),
                BatchSize::SmallInput,
            )
        });
    }

    for l in common::SIZES {
        let data = common::fill_random_vec(&mut rng, l);
        let sparse = SparseTableRmq::new(data.clone());
        let hybrid = HybridRmq::new(data.clone());
        let fischer_heun = FischerHeunRmq::new(data);

        group.bench_with_input(BenchmarkId::new("sparse table", l), &l, |b, _| {
            b.iter_batched(
                || common::random_range(&mut rng, l),
                |e| black_box(sparse.rmq(e.0, e.1)),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("hybrid", l), &l, |b, _| {
            b.iter_batched(
                || common::random_range(&mut rng, l),
                |e| black_box(hybrid.rmq(e.0, e.1)),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("fischer-heun", l), &l, |b, _| {
            b.iter_batched(
                || common::random_range(&mut rng, l),
                |e| black_box(fischer_heun.rmq(e.0, e.1)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rmq);
criterion_main!(benches);
