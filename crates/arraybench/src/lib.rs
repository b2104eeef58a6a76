//! Support library for a microbenchmark suite comparing array libraries.
//!
//! The suite (`cargo bench --bench suite`) times the same operations across
//! competing implementations:
//!
//! | Competitor | Types | Feature |
//! |------------|-------|---------|
//! | ndarray | `Array1/2/3`, views, `Zip`, `IxDyn` | `ndarray` |
//! | nalgebra | `DVector`, `DMatrix`, `SMatrix` | `nalgebra` |
//! | hand-vectorized | [`Mat`], [`MatRef`], [`FixedMat`] | always |
//! | C-like | `Vec<f64>` and slice loops | always |
//!
//! This crate holds everything the benchmark drivers share: the
//! hand-vectorized kernels and their aligned storage, size sweeps, seeded
//! inputs, padding, configuration and the SIMD report printed at startup.
//!
//! # Hand-vectorized kernels
//!
//! ```
//! use arraybench::{add_slices, Mat};
//!
//! let a = vec![1.0f64; 1003];
//! let b = vec![2.0f64; 1003];
//! let mut out = vec![0.0f64; 1003];
//!
//! // Scalar prefix up to the first aligned batch, vector body, scalar tail
//! add_slices(&a[1..], &b[1..], &mut out[1..]);
//! assert!(out[1..].iter().all(|&v| v == 3.0));
//!
//! let m = Mat::<f64>::from_fn(4, 4, |i, j| (i + j) as f64);
//! let doubled = &m + &m;
//! assert_eq!(doubled[(3, 3)], 12.0);
//! ```
//!
//! # Sweeps
//!
//! ```
//! use arraybench::sweep::{SizeSweep, VIEWS};
//!
//! assert_eq!(VIEWS.sizes().unwrap(), vec![3, 8, 64, 512, 1000]);
//! assert_eq!(SizeSweep::range(1, 10).multiplier(2).sizes().unwrap(), vec![1, 2, 4, 8, 10]);
//! ```
//!
//! # Reporting
//!
//! ```
//! use arraybench::Backend;
//!
//! println!("Using: {}", Backend::description());
//! ```

pub mod alloc;
pub mod config;
pub mod error;
pub mod mat;
pub mod pad;
pub mod random;
pub mod simd;
pub mod sweep;

mod backend;
mod element;

pub use crate::alloc::{AlignedBuf, OverAligned, RawAligned, DEFAULT_ALIGN};
pub use backend::{enabled_libraries, print_stats, version_info, write_stats, Backend};
pub use config::BenchConfig;
pub use element::Element;
pub use error::{AllocError, ConfigError, Error, PadError, Result, SweepError};
pub use mat::{FixedMat, Mat, MatMut, MatRef};
pub use pad::{pad_slice2d, PadMode, PadWidths};
pub use simd::{add_slices, fill_slice, simd_level, KernelDispatch, SimdLevel};
pub use sweep::SizeSweep;

#[cfg(feature = "ndarray")]
pub use pad::pad2d;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::{
        add_slices, fill_slice, AlignedBuf, Backend, BenchConfig, Element, FixedMat,
        KernelDispatch, Mat, MatMut, MatRef, OverAligned, PadMode, RawAligned, SimdLevel,
        SizeSweep,
    };
}
