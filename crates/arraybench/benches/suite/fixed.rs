//! Addition on matrices whose shape is a compile-time constant.

use arraybench::{random, BenchConfig, FixedMat};
use criterion::{black_box, BenchmarkId, Criterion};

use crate::common;

fn fixed_mat<const N: usize>(seed: u64) -> FixedMat<f64, N, N> {
    let values = random::uniform_vec(N * N, seed);
    FixedMat::from_fn(|i, j| values[i * N + j])
}

fn bench_fixed_mat<const N: usize>(group: &mut common::Group<'_>, config: &BenchConfig) {
    let a = fixed_mat::<N>(common::seed(config, 0));
    let b = fixed_mat::<N>(common::seed(config, 1));
    group.throughput(common::elements(N, 2));
    group.bench_function(BenchmarkId::new("fixed_mat", N), |bench| {
        bench.iter(|| black_box(&a + &b));
    });
}

// SMatrix dimensions must be concrete for the arithmetic impls, hence a
// macro instead of a const-generic function.
#[cfg(feature = "nalgebra")]
macro_rules! bench_smatrix {
    ($group:expr, $config:expr, $($n:literal),+) => {
        $({
            use nalgebra::SMatrix;

            let a_values = random::uniform_vec($n * $n, common::seed($config, 0));
            let b_values = random::uniform_vec($n * $n, common::seed($config, 1));
            let a = SMatrix::<f64, $n, $n>::from_row_slice(&a_values);
            let b = SMatrix::<f64, $n, $n>::from_row_slice(&b_values);
            $group.throughput(common::elements($n, 2));
            $group.bench_function(BenchmarkId::new("nalgebra", $n), |bench| {
                bench.iter(|| black_box(a + b));
            });
        })+
    };
}

pub fn register(c: &mut Criterion, config: &BenchConfig) {
    let mut group = c.benchmark_group("fixed");

    #[cfg(feature = "nalgebra")]
    bench_smatrix!(group, config, 3, 8, 64);

    bench_fixed_mat::<3>(&mut group, config);
    bench_fixed_mat::<8>(&mut group, config);
    bench_fixed_mat::<64>(&mut group, config);
    bench_fixed_mat::<512>(&mut group, config);

    group.finish();
}
