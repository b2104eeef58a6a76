//! Construction cost: empty, random, and view construction.

use arraybench::{random, sweep, BenchConfig, Mat};
use criterion::{black_box, BenchmarkId, Criterion};

use crate::common;

fn bench_empty(c: &mut Criterion, sizes: &[usize]) {
    let mut group = c.benchmark_group("construct_2d");

    for &n in sizes {
        #[cfg(feature = "ndarray")]
        {
            use ndarray::Array2;

            group.bench_with_input(BenchmarkId::new("ndarray_zeros", n), &n, |bench, &n| {
                bench.iter(|| black_box(Array2::<f64>::zeros((n, n))));
            });
            group.bench_with_input(BenchmarkId::new("ndarray_uninit", n), &n, |bench, &n| {
                bench.iter(|| black_box(Array2::<f64>::uninit((n, n))));
            });
        }

        #[cfg(feature = "nalgebra")]
        group.bench_with_input(BenchmarkId::new("nalgebra", n), &n, |bench, &n| {
            bench.iter(|| black_box(nalgebra::DMatrix::<f64>::zeros(n, n)));
        });

        group.bench_with_input(BenchmarkId::new("simd", n), &n, |bench, &n| {
            bench.iter(|| black_box(Mat::<f64>::zeros(n, n)));
        });

        group.bench_with_input(BenchmarkId::new("vec", n), &n, |bench, &n| {
            bench.iter(|| black_box(vec![0.0f64; n * n]));
        });
    }

    group.finish();
}

fn bench_random(c: &mut Criterion, config: &BenchConfig, sizes: &[usize]) {
    let mut group = c.benchmark_group("construct_random_2d");

    for &n in sizes {
        #[cfg(feature = "ndarray")]
        group.bench_with_input(BenchmarkId::new("ndarray", n), &n, |bench, &n| {
            bench.iter(|| black_box(random::uniform_array2(n, n, config.seed)));
        });

        #[cfg(feature = "nalgebra")]
        group.bench_with_input(BenchmarkId::new("nalgebra", n), &n, |bench, &n| {
            bench.iter(|| black_box(random::uniform_dmatrix(n, n, config.seed)));
        });

        group.bench_with_input(BenchmarkId::new("simd", n), &n, |bench, &n| {
            bench.iter(|| black_box(random::uniform_mat::<f64>(n, n, config.seed)));
        });
    }

    group.finish();
}

fn bench_view(c: &mut Criterion, config: &BenchConfig, sizes: &[usize]) {
    let mut group = c.benchmark_group("construct_view_2d");

    for &n in sizes {
        #[cfg(feature = "ndarray")]
        {
            let a = random::uniform_array2(n, n, config.seed);
            group.bench_with_input(BenchmarkId::new("ndarray", n), &n, |bench, _| {
                bench.iter(|| black_box(a.view()));
            });
        }

        #[cfg(feature = "nalgebra")]
        {
            let a = random::uniform_dmatrix(n, n, config.seed);
            group.bench_with_input(BenchmarkId::new("nalgebra", n), &n, |bench, &n| {
                bench.iter(|| black_box(a.view((0, 0), (n, n))));
            });
        }

        let a: Mat<f64> = random::uniform_mat(n, n, config.seed);
        group.bench_with_input(BenchmarkId::new("simd", n), &n, |bench, &n| {
            bench.iter(|| black_box(a.submatrix(0, 0, n, n)));
        });
    }

    group.finish();
}

pub fn register(c: &mut Criterion, config: &BenchConfig) {
    let sizes = common::sizes(&sweep::CONSTRUCT, config, 2);
    bench_empty(c, &sizes);
    bench_random(c, config, &sizes);
    bench_view(c, config, &sizes);
}
