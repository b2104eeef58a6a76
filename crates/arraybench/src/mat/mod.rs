//! Matrix types for the hand-vectorized competitor.
//!
//! This module provides faer-style matrix types over aligned storage:
//! - [`Mat<T>`]: owned matrix on a 32-byte aligned buffer
//! - [`MatRef<'a, T>`]: copyable read-only view, full or sub-block
//! - [`MatMut<'a, T>`]: mutable view for in-place operations
//! - [`FixedMat<T, R, C>`]: compile-time shape
//!
//! Elementwise arithmetic goes through [`crate::simd::add_slices`].
//!
//! # Example
//!
//! ```
//! use arraybench::{Mat, MatRef};
//!
//! let data = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let a = MatRef::from_slice(&data, 2, 3);
//!
//! // Method form
//! let b = a.add(&a);
//!
//! // Or operator syntax
//! let c = &a + &a;
//! assert_eq!(b.as_slice(), c.as_slice());
//!
//! // Factory methods
//! let mut z = Mat::<f64>::zeros(3, 3);
//! z.fill(1.0);
//! ```

mod fixed;
mod mut_;
mod ops;
mod owned;
mod ref_;

pub use fixed::FixedMat;
pub use mut_::MatMut;
pub use owned::Mat;
pub use ref_::MatRef;

#[track_caller]
pub(crate) fn assert_same_shape(lr: usize, lc: usize, rr: usize, rc: usize) {
    assert!(
        lr == rr && lc == rc,
        "dimension mismatch: left is {}x{}, right is {}x{}",
        lr,
        lc,
        rr,
        rc
    );
}
