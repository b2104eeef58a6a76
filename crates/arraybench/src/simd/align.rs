//! Alignment arithmetic shared by the peeled kernels.

use std::mem::size_of;

/// Number of leading elements of `ptr` to process one at a time before the
/// address reaches a `lanes * size_of::<T>()` boundary.
///
/// If `ptr` is not even aligned on `size_of::<T>()` no element ever lands on
/// a batch boundary, so the whole buffer is prefix and `len` is returned.
/// The result never exceeds `len`.
#[inline]
pub fn alignment_offset<T>(ptr: *const T, len: usize, lanes: usize) -> usize {
    let elem = size_of::<T>();
    debug_assert!(lanes.is_power_of_two(), "lanes must be a power of two");
    if elem == 0 || lanes <= 1 {
        return 0;
    }

    let addr = ptr as usize;
    if addr & (elem - 1) != 0 {
        return len;
    }

    let align_mask = lanes * elem - 1;
    let offset = ((lanes * elem - (addr & align_mask)) & align_mask) / elem;
    offset.min(len)
}

/// Whether `ptr` sits on an `align`-byte boundary.
#[inline]
pub fn is_aligned_to<T>(ptr: *const T, align: usize) -> bool {
    debug_assert!(align.is_power_of_two());
    (ptr as usize) & (align - 1) == 0
}
