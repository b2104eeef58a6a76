//! Allocation strategies for an `n x n` block of f64.

use std::mem::size_of;

use arraybench::{sweep, AlignedBuf, BenchConfig, OverAligned, RawAligned};
use criterion::{black_box, BenchmarkId, Criterion};

use crate::common;

const RAW_ALIGNMENTS: [usize; 5] = [16, 32, 64, 128, 256];

pub fn register(c: &mut Criterion, config: &BenchConfig) {
    let mut group = c.benchmark_group("allocators");

    for n in common::sizes(&sweep::LEGACY, config, 2) {
        let len = n * n;
        let bytes = len * size_of::<f64>();

        #[cfg(feature = "nalgebra")]
        group.bench_with_input(BenchmarkId::new("nalgebra", n), &n, |bench, &n| {
            bench.iter(|| black_box(nalgebra::DMatrix::<f64>::zeros(n, n)));
        });

        for align in [32usize, 16] {
            common::setup(AlignedBuf::<f64>::try_zeroed(len, align), "aligned buffer");
            let id = BenchmarkId::new(format!("aligned_buf_{}", align), n);
            group.bench_with_input(id, &len, |bench, &len| {
                bench.iter(|| black_box(AlignedBuf::<f64>::zeroed(len, align)));
            });
        }

        group.bench_with_input(BenchmarkId::new("vec", n), &len, |bench, &len| {
            bench.iter(|| black_box(vec![0.0f64; len]));
        });

        for align in [16usize, 32] {
            common::setup(OverAligned::new(bytes, align), "over-aligned block");
            let id = BenchmarkId::new(format!("over_aligned_{}", align), n);
            group.bench_with_input(id, &bytes, |bench, &bytes| {
                bench.iter(|| black_box(OverAligned::new(bytes, align)));
            });
        }

        for align in RAW_ALIGNMENTS {
            common::setup(RawAligned::new(bytes, align), "raw aligned block");
            let id = BenchmarkId::new(format!("raw_aligned_{}", align), n);
            group.bench_with_input(id, &bytes, |bench, &bytes| {
                bench.iter(|| black_box(RawAligned::new(bytes, align)));
            });
        }
    }

    group.finish();
}
