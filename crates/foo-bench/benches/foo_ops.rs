//! Criterion micro-benchmarks for `add_two`, `sub_two` and a single
//! reserved `Vec` append.

use criterion::{criterion_group, criterion_main, Criterion};
use foo_bench::Registry;

fn foo_ops(c: &mut Criterion) {
    Registry::standard().bench_all(c);
}

criterion_group!(benches, foo_ops);
criterion_main!(benches);
