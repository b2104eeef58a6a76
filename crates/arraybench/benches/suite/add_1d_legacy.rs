//! Older 1-D comparison: library addition against the hand-peeled kernel
//! on 32-byte aligned buffers.

use arraybench::simd::{alignment_offset, simd_level};
use arraybench::{add_slices, random, sweep, AlignedBuf, BenchConfig, DEFAULT_ALIGN};
use criterion::{black_box, BenchmarkId, Criterion};

use crate::common;

fn aligned_copy(src: &[f64]) -> AlignedBuf<f64> {
    let mut buf = AlignedBuf::zeroed(src.len(), DEFAULT_ALIGN);
    buf.copy_from_slice(src);
    buf
}

pub fn register(c: &mut Criterion, config: &BenchConfig) {
    let mut group = c.benchmark_group("add_1d_legacy");

    for n in common::sizes(&sweep::LEGACY_1D, config, 1) {
        group.throughput(common::elements(n, 1));

        #[cfg(feature = "ndarray")]
        {
            let a = random::uniform_array1(n, common::seed(config, 0));
            let b = random::uniform_array1(n, common::seed(config, 1));
            group.bench_with_input(BenchmarkId::new("ndarray", n), &n, |bench, _| {
                bench.iter(|| black_box(&a + &b));
            });
        }

        #[cfg(feature = "nalgebra")]
        {
            let a = random::uniform_dvector(n, common::seed(config, 0));
            let b = random::uniform_dvector(n, common::seed(config, 1));
            group.bench_with_input(BenchmarkId::new("nalgebra", n), &n, |bench, _| {
                bench.iter(|| black_box(&a + &b));
            });
        }

        let a = aligned_copy(&random::uniform_vec(n, common::seed(config, 0)));
        let b = aligned_copy(&random::uniform_vec(n, common::seed(config, 1)));
        group.bench_with_input(BenchmarkId::new("simd_aligned", n), &n, |bench, &n| {
            bench.iter(|| {
                let mut res = AlignedBuf::zeroed(n, DEFAULT_ALIGN);
                add_slices(&a, &b, &mut res);
                black_box(res)
            });
        });

        // Start one element in so the kernel has to peel a scalar prefix.
        if n > 1 {
            let lanes = simd_level().lanes::<f64>();
            log::trace!(
                "add_1d_legacy n={} peel={}",
                n,
                alignment_offset(a[1..].as_ptr(), n - 1, lanes)
            );
            group.bench_with_input(BenchmarkId::new("simd_unaligned", n), &n, |bench, &n| {
                bench.iter(|| {
                    let mut res = AlignedBuf::zeroed(n, DEFAULT_ALIGN);
                    add_slices(&a[1..], &b[1..], &mut res[1..]);
                    black_box(res)
                });
            });
        }
    }

    group.finish();
}
