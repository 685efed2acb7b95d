//! Benchmarks for caesarcrypt operations.
//!
//! Measures passphrase derivation, encode throughput across message sizes,
//! and a full brute-force enumeration.

use caesarcrypt::{analyze, brute_force, derive_shift, encode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Passphrase used consistently across all benchmarks.
const BENCH_PASSPHRASE: &str = "BenchmarkPassphrase2024";

/// Sample sentence repeated to build messages of a given size.
const SAMPLE: &str = "The quick brown fox jumps over the lazy dog, 1234567890! ";

fn message_of(len: usize) -> String {
    SAMPLE.chars().cycle().take(len).collect()
}

fn bench_derive_shift(c: &mut Criterion) {
    c.bench_function("derive_shift", |b| {
        b.iter(|| derive_shift(black_box(BENCH_PASSPHRASE)));
    });
}

/// Encode throughput for messages up to the default validation limit and beyond.
fn bench_encode_scaling(c: &mut Criterion) {
    let shift = derive_shift(BENCH_PASSPHRASE);
    let mut group = c.benchmark_group("encode_scaling");
    for len in [64usize, 1000, 16_384] {
        let message = message_of(len);
        group.throughput(Throughput::Bytes(message.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &message, |b, msg| {
            b.iter(|| encode(black_box(msg), shift));
        });
    }
    group.finish();
}

fn bench_brute_force(c: &mut Criterion) {
    let cipher = encode(&message_of(1000), 7);
    c.bench_function("brute_force_1000", |b| {
        b.iter(|| brute_force(black_box(&cipher)));
    });
}

fn bench_analyze(c: &mut Criterion) {
    let message = message_of(1000);
    c.bench_function("analyze_1000", |b| {
        b.iter(|| analyze(black_box(&message)));
    });
}

criterion_group!(
    benches,
    bench_derive_shift,
    bench_encode_scaling,
    bench_brute_force,
    bench_analyze
);
criterion_main!(benches);
