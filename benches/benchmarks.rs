use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use millrace::{MiddlewareChain, Store};

fn store_update_benchmark(c: &mut Criterion) {
    #[derive(Clone)]
    struct State {
        counter: usize,
        name: String,
    }

    let store = Store::builder(State {
        counter: 0,
        name: "bench".to_string(),
    })
    .renderer(|| {})
    .build();

    c.bench_function("store_update", |b| {
        let mut i = 0;
        b.iter(|| {
            store
                .update(State {
                    counter: black_box(i),
                    name: "bench".to_string(),
                })
                .unwrap();
            i += 1;
        });
    });
}

fn chain_apply_benchmark(c: &mut Criterion) {
    let chain = MiddlewareChain::new()
        .with(|n: u64| n.wrapping_add(1))
        .with(|n: u64| n.wrapping_mul(3))
        .with(|n: u64| n ^ 0xa5a5)
        .with(|n: u64| n.rotate_left(7));

    c.bench_function("chain_apply", |b| {
        b.iter(|| black_box(chain.apply(black_box(42))));
    });
}

fn middleware_depth_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("middleware_depth");

    for stage_count in [0usize, 1, 4, 16].iter() {
        let mut chain = MiddlewareChain::new();
        for _ in 0..*stage_count {
            chain.push(|n: usize| n.wrapping_add(1));
        }
        let store = Store::builder(0usize)
            .middleware_chain(chain)
            .renderer(|| {})
            .build();

        group.bench_with_input(
            BenchmarkId::from_parameter(stage_count),
            stage_count,
            |b, _| {
                let mut i = 0;
                b.iter(|| {
                    store.update(black_box(i)).unwrap();
                    i += 1;
                });
            },
        );
    }
    group.finish();
}

fn render_dispatch_benchmark(c: &mut Criterion) {
    let store = Store::builder(0u32).renderer(|| {}).build();

    c.bench_function("render_dispatch", |b| {
        b.iter(|| {
            store.render().unwrap();
        });
    });
}

criterion_group!(
    benches,
    store_update_benchmark,
    chain_apply_benchmark,
    middleware_depth_benchmark,
    render_dispatch_benchmark,
);
criterion_main!(benches);
