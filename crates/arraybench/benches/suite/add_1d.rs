//! `res = a + b` on 1-D inputs, fresh result every iteration.

use arraybench::{random, sweep, BenchConfig, Mat};
use criterion::{black_box, BenchmarkId, Criterion};

use crate::common;

pub fn register(c: &mut Criterion, config: &BenchConfig) {
    let mut group = c.benchmark_group("add_1d");

    for n in common::sizes(&sweep::ADD_1D, config, 1) {
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

        let a: Mat<f64> = random::uniform_mat(1, n, common::seed(config, 0));
        let b: Mat<f64> = random::uniform_mat(1, n, common::seed(config, 1));
        group.bench_with_input(BenchmarkId::new("simd", n), &n, |bench, _| {
            bench.iter(|| black_box(&a + &b));
        });

        let a = random::uniform_vec(n, common::seed(config, 0));
        let b = random::uniform_vec(n, common::seed(config, 1));
        group.bench_with_input(BenchmarkId::new("vec", n), &n, |bench, &n| {
            bench.iter(|| {
                let mut res = vec![0.0f64; n];
                for i in 0..n {
                    res[i] = a[i] + b[i];
                }
                black_box(res)
            });
        });
    }

    group.finish();
}
