use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bundlebench_core::{FIXTURE_SIZE, FixedDiscount, PercentageDiscount, StrategySpec};
use bundlebench_heap::{Product as HeapProduct, ProductBundle as HeapBundle, ProductComponent as _};
use bundlebench_stack::{Product as StackProduct, ProductBundle as StackBundle, ProductComponent as _};

/// Total over the reference workload, both variants.
fn bench_fixture_total_price(c: &mut Criterion) {
    let heap_bundle = bundlebench_heap::fixture(FIXTURE_SIZE);
    let stack_bundle = bundlebench_stack::fixture(FIXTURE_SIZE);

    let mut group = c.benchmark_group("fixture_total_price");
    group.throughput(Throughput::Elements(FIXTURE_SIZE as u64));
    group.bench_function("heap_total_price", |b| {
        b.iter(|| black_box(&heap_bundle).total_price())
    });
    group.bench_function("stack_total_price", |b| {
        b.iter(|| black_box(&stack_bundle).total_price())
    });
    group.finish();
}

/// Scaling of the total computation with bundle size.
fn bench_total_price_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_price_scaling");

    for size in [1_000usize, 10_000, 100_000] {
        let heap_bundle = bundlebench_heap::fixture(size);
        let stack_bundle = bundlebench_stack::fixture(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("heap", size), &heap_bundle, |b, bundle| {
            b.iter(|| black_box(bundle).total_price())
        });
        group.bench_with_input(BenchmarkId::new("stack", size), &stack_bundle, |b, bundle| {
            b.iter(|| black_box(bundle).total_price())
        });
    }

    group.finish();
}

/// Static children with an enum-dispatched strategy vs. boxed trait-object strategies.
fn bench_strategy_dispatch(c: &mut Criterion) {
    const SIZE: usize = 10_000;
    let strategies = [
        StrategySpec::None,
        StrategySpec::Percentage(10.0),
        StrategySpec::Fixed(50.0),
    ];

    let mut heap_bundle = HeapBundle::new("Mixed", PercentageDiscount::new(15.0));
    for i in 0..SIZE {
        heap_bundle.add(HeapProduct::with_boxed_strategy(
            format!("Product {i}"),
            (i + 1) as f64 * 100.0,
            strategies[i % strategies.len()].into_boxed(),
        ));
    }

    let stack_bundle = StackBundle::new(
        "Mixed",
        (0..SIZE)
            .map(|i| {
                StackProduct::new(
                    format!("Product {i}"),
                    (i + 1) as f64 * 100.0,
                    strategies[i % strategies.len()],
                )
            })
            .collect(),
        PercentageDiscount::new(15.0),
    );

    let mut group = c.benchmark_group("mixed_strategies");
    group.throughput(Throughput::Elements(SIZE as u64));
    group.bench_function("heap_boxed_strategies", |b| {
        b.iter(|| black_box(&heap_bundle).total_price())
    });
    group.bench_function("stack_enum_strategies", |b| {
        b.iter(|| black_box(&stack_bundle).total_price())
    });
    group.finish();
}

/// Cost of replacing the root strategy: in-place mutation vs. typed rebuild.
fn bench_strategy_replacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategy_replacement");

    let mut heap_bundle = bundlebench_heap::fixture(FIXTURE_SIZE);
    group.bench_function("heap_set_discount_strategy", |b| {
        b.iter(|| {
            heap_bundle.set_discount_strategy(Box::new(FixedDiscount::new(black_box(3000.0))));
        })
    });

    group.bench_function("stack_with_discount_strategy", |b| {
        b.iter_batched(
            || bundlebench_stack::fixture(1_000),
            |bundle| bundle.with_discount_strategy(FixedDiscount::new(black_box(3000.0))),
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_fixture_total_price,
    bench_total_price_scaling,
    bench_strategy_dispatch,
    bench_strategy_replacement
);
criterion_main!(benches);
