//! 256-bit kernels, compiled with AVX enabled.
//!
//! Callers must have checked the CPU supports AVX; see [`simd_level`].
//!
//! [`simd_level`]: crate::simd::simd_level

#![cfg(target_arch = "x86_64")]

use wide::{f32x8, f64x4};

use super::{peeled_add, peeled_fill};

/// # Safety
/// The CPU must support AVX.
#[target_feature(enable = "avx")]
pub unsafe fn add_f64(a: &[f64], b: &[f64], out: &mut [f64]) {
    peeled_add::<f64x4>(a, b, out);
}

/// # Safety
/// The CPU must support AVX.
#[target_feature(enable = "avx")]
pub unsafe fn add_f32(a: &[f32], b: &[f32], out: &mut [f32]) {
    peeled_add::<f32x8>(a, b, out);
}

/// # Safety
/// The CPU must support AVX.
#[target_feature(enable = "avx")]
pub unsafe fn fill_f64(out: &mut [f64], value: f64) {
    peeled_fill::<f64x4>(out, value);
}

/// # Safety
/// The CPU must support AVX.
#[target_feature(enable = "avx")]
pub unsafe fn fill_f32(out: &mut [f32], value: f32) {
    peeled_fill::<f32x8>(out, value);
}
