use super::detect::{simd_level, SimdLevel};
use super::kernels::{portable, x128};
#[cfg(target_arch = "x86_64")]
use super::kernels::x256;
use crate::element::Element;

/// Runtime-dispatched `out = a + b` using the widest kernel for this CPU.
///
/// # Panics
/// Panics if the three slices differ in length.
pub fn add_slices<T: KernelDispatch>(a: &[T], b: &[T], out: &mut [T]) {
    assert!(
        a.len() == out.len() && b.len() == out.len(),
        "length mismatch: a {} b {} out {}",
        a.len(),
        b.len(),
        out.len()
    );
    T::dispatch_add(a, b, out);
}

/// Runtime-dispatched fill of `out` with `value`.
pub fn fill_slice<T: KernelDispatch>(out: &mut [T], value: T) {
    T::dispatch_fill(out, value);
}

/// Element types with a dispatched add/fill kernel.
pub trait KernelDispatch: Element {
    /// Pick the kernel for the detected [`SimdLevel`]. Lengths are already checked.
    fn dispatch_add(a: &[Self], b: &[Self], out: &mut [Self]);

    /// Pick the fill kernel for the detected [`SimdLevel`].
    fn dispatch_fill(out: &mut [Self], value: Self);
}

impl KernelDispatch for f64 {
    fn dispatch_add(a: &[f64], b: &[f64], out: &mut [f64]) {
        match simd_level() {
            #[cfg(target_arch = "x86_64")]
            SimdLevel::Avx | SimdLevel::Avx2 | SimdLevel::Avx512 => {
                // SAFETY: AVX presence was detected at runtime.
                unsafe { x256::add_f64(a, b, out) }
            }
            SimdLevel::Scalar => portable::add(a, b, out),
            _ => x128::add_f64(a, b, out),
        }
    }

    fn dispatch_fill(out: &mut [f64], value: f64) {
        match simd_level() {
            #[cfg(target_arch = "x86_64")]
            SimdLevel::Avx | SimdLevel::Avx2 | SimdLevel::Avx512 => {
                // SAFETY: AVX presence was detected at runtime.
                unsafe { x256::fill_f64(out, value) }
            }
            SimdLevel::Scalar => portable::fill(out, value),
            _ => x128::fill_f64(out, value),
        }
    }
}

impl KernelDispatch for f32 {
    fn dispatch_add(a: &[f32], b: &[f32], out: &mut [f32]) {
        match simd_level() {
            #[cfg(target_arch = "x86_64")]
            SimdLevel::Avx | SimdLevel::Avx2 | SimdLevel::Avx512 => {
                // SAFETY: AVX presence was detected at runtime.
                unsafe { x256::add_f32(a, b, out) }
            }
            SimdLevel::Scalar => portable::add(a, b, out),
            _ => x128::add_f32(a, b, out),
        }
    }

    fn dispatch_fill(out: &mut [f32], value: f32) {
        match simd_level() {
            #[cfg(target_arch = "x86_64")]
            SimdLevel::Avx | SimdLevel::Avx2 | SimdLevel::Avx512 => {
                // SAFETY: AVX presence was detected at runtime.
                unsafe { x256::fill_f32(out, value) }
            }
            SimdLevel::Scalar => portable::fill(out, value),
            _ => x128::fill_f32(out, value),
        }
    }
}
