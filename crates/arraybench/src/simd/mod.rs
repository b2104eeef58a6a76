//! Hand-vectorized elementwise kernels.
//!
//! This is the "manually vectorized" competitor in the suite: `wide` batches
//! with explicit alignment peeling, selected at runtime from the detected
//! instruction set.

mod align;
mod detect;
pub mod dispatch;
pub mod kernels;

pub use align::{alignment_offset, is_aligned_to};
pub use detect::{simd_level, SimdLevel};
pub use dispatch::{add_slices, fill_slice, KernelDispatch};
pub use kernels::{peeled_add, peeled_fill, Batch};
