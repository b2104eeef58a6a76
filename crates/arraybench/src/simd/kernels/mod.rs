//! Elementwise kernels with alignment peeling.
//!
//! Each kernel walks the buffers in three phases: a scalar prefix until the
//! first input reaches a batch boundary, a vector middle in whole batches,
//! and a scalar suffix for the remainder.

pub mod portable;
pub mod x128;
pub mod x256;

use std::ops::Add;

use wide::{f32x4, f32x8, f64x2, f64x4};

use super::align::alignment_offset;
use crate::element::Element;

/// A fixed-width vector of `LANES` elements.
pub trait Batch: Copy + Add<Output = Self> {
    /// Lane type.
    type Elem: Element;

    /// Number of lanes; always a power of two.
    const LANES: usize;

    /// Broadcast one value to every lane.
    fn splat(value: Self::Elem) -> Self;

    /// Read `LANES` consecutive elements.
    ///
    /// # Safety
    /// `ptr` must be valid for `LANES` reads.
    unsafe fn load(ptr: *const Self::Elem) -> Self;

    /// Write every lane to `LANES` consecutive elements.
    ///
    /// # Safety
    /// `ptr` must be valid for `LANES` writes.
    unsafe fn store(self, ptr: *mut Self::Elem);
}

macro_rules! impl_batch {
    ($($batch:ty => $elem:ty, $lanes:expr);* $(;)?) => {
        $(
            impl Batch for $batch {
                type Elem = $elem;
                const LANES: usize = $lanes;

                #[inline(always)]
                fn splat(value: $elem) -> Self {
                    <$batch>::splat(value)
                }

                #[inline(always)]
                unsafe fn load(ptr: *const $elem) -> Self {
                    <$batch>::from(ptr.cast::<[$elem; $lanes]>().read_unaligned())
                }

                #[inline(always)]
                unsafe fn store(self, ptr: *mut $elem) {
                    let lanes: [$elem; $lanes] = self.into();
                    ptr.cast::<[$elem; $lanes]>().write_unaligned(lanes);
                }
            }
        )*
    };
}

impl_batch! {
    f64x4 => f64, 4;
    f64x2 => f64, 2;
    f32x8 => f32, 8;
    f32x4 => f32, 4;
}

/// `out[i] = a[i] + b[i]` in batches of `B`, peeling on the alignment of `a`.
///
/// # Panics
/// Panics if the three slices differ in length.
#[inline(always)]
pub fn peeled_add<B: Batch>(a: &[B::Elem], b: &[B::Elem], out: &mut [B::Elem]) {
    let len = out.len();
    assert!(
        a.len() == len && b.len() == len,
        "length mismatch: a {} b {} out {}",
        a.len(),
        b.len(),
        len
    );

    let align_begin = alignment_offset(a.as_ptr(), len, B::LANES);
    let align_end = align_begin + ((len - align_begin) & !(B::LANES - 1));

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();
    let out_ptr = out.as_mut_ptr();

    // SAFETY: every index below is < len, and the vector loop only starts a
    // batch when i + LANES <= align_end <= len.
    unsafe {
        let mut i = 0;
        while i < align_begin {
            *out_ptr.add(i) = *a_ptr.add(i) + *b_ptr.add(i);
            i += 1;
        }
        while i < align_end {
            let lhs = B::load(a_ptr.add(i));
            let rhs = B::load(b_ptr.add(i));
            (lhs + rhs).store(out_ptr.add(i));
            i += B::LANES;
        }
        while i < len {
            *out_ptr.add(i) = *a_ptr.add(i) + *b_ptr.add(i);
            i += 1;
        }
    }
}

/// Set every element of `out` to `value` with splat stores.
#[inline(always)]
pub fn peeled_fill<B: Batch>(out: &mut [B::Elem], value: B::Elem) {
    let len = out.len();
    let align_begin = alignment_offset(out.as_ptr(), len, B::LANES);
    let align_end = align_begin + ((len - align_begin) & !(B::LANES - 1));
    let splat = B::splat(value);
    let out_ptr = out.as_mut_ptr();

    // SAFETY: same bounds as `peeled_add`.
    unsafe {
        let mut i = 0;
        while i < align_begin {
            *out_ptr.add(i) = value;
            i += 1;
        }
        while i < align_end {
            splat.store(out_ptr.add(i));
            i += B::LANES;
        }
        while i < len {
            *out_ptr.add(i) = value;
            i += 1;
        }
    }
}
