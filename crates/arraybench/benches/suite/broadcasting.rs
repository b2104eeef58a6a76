//! 3-D + 2-D broadcast addition: `res[i, j, k] = a[i, j, k] + b[j, k]`.

use arraybench::{add_slices, random, sweep, BenchConfig};
use criterion::{black_box, BenchmarkId, Criterion};

use crate::common;

pub fn register(c: &mut Criterion, config: &BenchConfig) {
    let mut group = c.benchmark_group("broadcasting");

    // n^3 grows fast: the top sweep points fall outside the default element cap
    for n in common::sizes(&sweep::BROADCAST, config, 3) {
        group.throughput(common::elements(n, 3));

        #[cfg(feature = "ndarray")]
        {
            use ndarray::Array3;

            let a = random::uniform_array3(n, n, n, common::seed(config, 0));
            let b = random::uniform_array2(n, n, common::seed(config, 1));
            group.bench_with_input(BenchmarkId::new("ndarray", n), &n, |bench, _| {
                bench.iter(|| black_box(&a + &b));
            });

            group.bench_with_input(BenchmarkId::new("ndarray_loop", n), &n, |bench, &n| {
                bench.iter(|| {
                    let mut res = Array3::<f64>::zeros((n, n, n));
                    for i in 0..n {
                        for j in 0..n {
                            for k in 0..n {
                                res[[i, j, k]] = a[[i, j, k]] + b[[j, k]];
                            }
                        }
                    }
                    black_box(res)
                });
            });
        }

        let plane = n * n;
        let a = random::uniform_vec(plane * n, common::seed(config, 0));
        let b = random::uniform_vec(plane, common::seed(config, 1));

        group.bench_with_input(BenchmarkId::new("vec_loop", n), &n, |bench, &n| {
            bench.iter(|| {
                let mut res = vec![0.0f64; plane * n];
                for i in 0..n {
                    for j in 0..n {
                        for k in 0..n {
                            res[i * plane + j * n + k] = a[i * plane + j * n + k] + b[j * n + k];
                        }
                    }
                }
                black_box(res)
            });
        });

        // One kernel call per outer slab, reusing the 2-D operand.
        group.bench_with_input(BenchmarkId::new("simd", n), &n, |bench, &n| {
            bench.iter(|| {
                let mut res = vec![0.0f64; plane * n];
                for (slab, out) in a.chunks_exact(plane).zip(res.chunks_exact_mut(plane)) {
                    add_slices(slab, &b, out);
                }
                black_box(res)
            });
        });
    }

    group.finish();
}
