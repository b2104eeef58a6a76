//! Fill a 2-D container with a value that changes every iteration.

use arraybench::{sweep, BenchConfig, Mat};
use criterion::{black_box, BenchmarkId, Criterion};

use crate::common;

pub fn register(c: &mut Criterion, config: &BenchConfig) {
    let mut group = c.benchmark_group("scalar_assignment");

    for n in common::sizes(&sweep::SCALAR, config, 2) {
        group.throughput(common::elements(n, 2));

        #[cfg(feature = "ndarray")]
        {
            use ndarray::Array2;

            let mut a = Array2::<f64>::zeros((n, n));
            let mut value = 0.0;
            group.bench_with_input(BenchmarkId::new("ndarray_fill", n), &n, |bench, _| {
                bench.iter(|| {
                    a.fill(value);
                    value += 1.0;
                    black_box(a.as_ptr());
                });
            });

            let mut value = 0.0;
            group.bench_with_input(BenchmarkId::new("ndarray_loop", n), &n, |bench, &n| {
                bench.iter(|| {
                    for i in 0..n {
                        for j in 0..n {
                            a[[i, j]] = value;
                        }
                    }
                    value += 1.0;
                    black_box(a.as_ptr());
                });
            });
        }

        #[cfg(feature = "nalgebra")]
        {
            let mut m = nalgebra::DMatrix::<f64>::zeros(n, n);
            let mut value = 0.0;
            group.bench_with_input(BenchmarkId::new("nalgebra_fill", n), &n, |bench, _| {
                bench.iter(|| {
                    m.fill(value);
                    value += 1.0;
                    black_box(m.as_ptr());
                });
            });
        }

        let mut m = Mat::<f64>::zeros(n, n);
        let mut value = 0.0;
        group.bench_with_input(BenchmarkId::new("simd_fill", n), &n, |bench, _| {
            bench.iter(|| {
                m.fill(value);
                value += 1.0;
                black_box(m.as_ptr());
            });
        });

        let mut v = vec![0.0f64; n * n];
        let mut value = 0.0;
        group.bench_with_input(BenchmarkId::new("vec_fill", n), &n, |bench, _| {
            bench.iter(|| {
                v.fill(value);
                value += 1.0;
                black_box(v.as_ptr());
            });
        });
    }

    group.finish();
}
