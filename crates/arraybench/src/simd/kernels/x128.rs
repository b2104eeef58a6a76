//! 128-bit kernels: SSE2 on x86-64, NEON on AArch64.
//!
//! Both are baseline features of their targets, so no runtime check is needed.

use wide::{f32x4, f64x2};

use super::{peeled_add, peeled_fill};

pub fn add_f64(a: &[f64], b: &[f64], out: &mut [f64]) {
    peeled_add::<f64x2>(a, b, out);
}

pub fn add_f32(a: &[f32], b: &[f32], out: &mut [f32]) {
    peeled_add::<f32x4>(a, b, out);
}

pub fn fill_f64(out: &mut [f64], value: f64) {
    peeled_fill::<f64x2>(out, value);
}

pub fn fill_f32(out: &mut [f32], value: f32) {
    peeled_fill::<f32x4>(out, value);
}
