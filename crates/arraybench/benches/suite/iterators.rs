//! Sum every element through each container's iterator.

use arraybench::{random, sweep, BenchConfig, Mat};
use criterion::{black_box, BenchmarkId, Criterion};

use crate::common;

#[inline(always)]
fn sum<'a>(it: impl Iterator<Item = &'a f64>) -> f64 {
    let mut tmp = 0.0;
    for v in it {
        tmp += *v;
    }
    tmp
}

pub fn register(c: &mut Criterion, config: &BenchConfig) {
    let mut group = c.benchmark_group("iterators");

    for n in common::sizes(&sweep::ITERATE, config, 2) {
        group.throughput(common::elements(n, 2));

        #[cfg(feature = "ndarray")]
        {
            use ndarray::s;

            let a = random::uniform_array2(n, n, config.seed);
            group.bench_with_input(BenchmarkId::new("ndarray", n), &n, |bench, _| {
                bench.iter(|| black_box(sum(a.iter())));
            });

            let view = a.view();
            group.bench_with_input(BenchmarkId::new("ndarray_view", n), &n, |bench, _| {
                bench.iter(|| black_box(sum(view.iter())));
            });

            // Reversed rows: a negative stride, so not the contiguous walk.
            let strided = a.slice(s![..;-1, ..]);
            assert!(n < 2 || !strided.is_standard_layout());
            group.bench_with_input(BenchmarkId::new("ndarray_strided", n), &n, |bench, _| {
                bench.iter(|| black_box(sum(strided.iter())));
            });
        }

        #[cfg(feature = "nalgebra")]
        {
            let m = random::uniform_dmatrix(n, n, config.seed);
            group.bench_with_input(BenchmarkId::new("nalgebra", n), &n, |bench, _| {
                bench.iter(|| black_box(sum(m.iter())));
            });
        }

        let v = random::uniform_vec(n * n, config.seed);
        group.bench_with_input(BenchmarkId::new("slice", n), &n, |bench, _| {
            bench.iter(|| black_box(sum(v.as_slice().iter())));
        });

        let m: Mat<f64> = random::uniform_mat(n, n, config.seed);
        let view = m.as_ref();
        group.bench_with_input(BenchmarkId::new("mat_ref", n), &n, |bench, _| {
            bench.iter(|| black_box(sum(view.iter())));
        });
    }

    group.finish();
}
