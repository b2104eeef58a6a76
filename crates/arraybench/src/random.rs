//! Seeded uniform inputs in `[0, 1)`.
//!
//! Every generator takes an explicit seed so the same benchmark always sees
//! the same data across runs and baselines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::element::Element;
use crate::mat::Mat;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `n` values drawn uniformly from `[0, 1)`.
pub fn uniform_vec(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = rng(seed);
    (0..n).map(|_| rng.gen::<f64>()).collect()
}

/// Row-major `nrows x ncols` matrix on aligned storage.
pub fn uniform_mat<T: Element>(nrows: usize, ncols: usize, seed: u64) -> Mat<T> {
    let mut rng = rng(seed);
    Mat::from_fn(nrows, ncols, |_, _| T::sample_unit(&mut rng))
}

#[cfg(feature = "ndarray")]
mod nd {
    use ndarray::{Array, Array1, Array2, Array3, Dimension, ShapeBuilder};
    use rand::Rng;

    fn uniform<D: Dimension, Sh: ShapeBuilder<Dim = D>>(shape: Sh, seed: u64) -> Array<f64, D> {
        let mut rng = super::rng(seed);
        Array::from_shape_simple_fn(shape, || rng.gen::<f64>())
    }

    pub fn uniform_array1(n: usize, seed: u64) -> Array1<f64> {
        uniform(n, seed)
    }

    pub fn uniform_array2(rows: usize, cols: usize, seed: u64) -> Array2<f64> {
        uniform((rows, cols), seed)
    }

    pub fn uniform_array3(d0: usize, d1: usize, d2: usize, seed: u64) -> Array3<f64> {
        uniform((d0, d1, d2), seed)
    }
}

#[cfg(feature = "ndarray")]
pub use nd::{uniform_array1, uniform_array2, uniform_array3};

#[cfg(feature = "nalgebra")]
mod na {
    use nalgebra::{DMatrix, DVector};
    use rand::Rng;

    pub fn uniform_dvector(n: usize, seed: u64) -> DVector<f64> {
        let mut rng = super::rng(seed);
        DVector::from_fn(n, |_, _| rng.gen::<f64>())
    }

    pub fn uniform_dmatrix(rows: usize, cols: usize, seed: u64) -> DMatrix<f64> {
        let mut rng = super::rng(seed);
        DMatrix::from_fn(rows, cols, |_, _| rng.gen::<f64>())
    }
}

#[cfg(feature = "nalgebra")]
pub use na::{uniform_dmatrix, uniform_dvector};
