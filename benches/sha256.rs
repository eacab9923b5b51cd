// benches/sha256.rs
//! SHA-256 throughput.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use notepadcrypt_rs::crypto::sha256::sha256;
use std::hint::black_box;

fn bench_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    for &size in &[16usize, 1024, 64 * 1024] {
        let message = vec![0x61u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("bytes", size), &message, |b, message| {
            b.iter(|| black_box(sha256(black_box(message)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha256);
criterion_main!(benches);
