//! Aligned allocation strategies.
//!
//! Three ways to get an aligned block, each measured by the allocator
//! benchmarks:
//! - [`AlignedBuf`]: typed buffer through the global allocator with an
//!   explicit alignment in the [`Layout`].
//! - [`RawAligned`]: untyped block, the `_mm_malloc`/`posix_memalign` style.
//! - [`OverAligned`]: over-allocate by `align` bytes, round the address up and
//!   stash the original pointer just before the aligned one.

use std::alloc::{self, handle_alloc_error, Layout};
use std::fmt;
use std::mem::{align_of, size_of};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

use crate::element::Element;
use crate::error::AllocError;

/// Default alignment for in-crate matrices: one 256-bit batch.
pub const DEFAULT_ALIGN: usize = 32;

fn check_align(align: usize, min: usize) -> Result<(), AllocError> {
    if align.is_power_of_two() && align >= min {
        Ok(())
    } else {
        Err(AllocError::InvalidAlignment { align, min })
    }
}

/// Heap buffer of `T` whose first element sits on an `align`-byte boundary.
pub struct AlignedBuf<T: Element> {
    ptr: NonNull<T>,
    len: usize,
    align: usize,
}

// SAFETY: AlignedBuf owns its allocation exclusively, like Vec<T>.
unsafe impl<T: Element> Send for AlignedBuf<T> {}
unsafe impl<T: Element> Sync for AlignedBuf<T> {}

impl<T: Element> AlignedBuf<T> {
    fn layout(len: usize, align: usize) -> Result<Layout, AllocError> {
        check_align(align, align_of::<T>())?;
        let array = Layout::array::<T>(len).map_err(|_| AllocError::LayoutOverflow { len })?;
        array
            .align_to(align)
            .map_err(|_| AllocError::InvalidAlignment { align, min: align_of::<T>() })
    }

    fn dangling(len: usize, align: usize) -> Self {
        // Any non-null address that is a multiple of `align` is a valid
        // pointer for an empty slice.
        let ptr = NonNull::new(align as *mut T).unwrap_or(NonNull::dangling());
        Self { ptr, len, align }
    }

    /// Allocate `len` zeroed elements aligned to `align` bytes.
    pub fn try_zeroed(len: usize, align: usize) -> Result<Self, AllocError> {
        let layout = Self::layout(len, align)?;
        if layout.size() == 0 {
            return Ok(Self::dangling(len, align));
        }
        // SAFETY: layout has non-zero size; all-zero bits are a valid T.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(AllocError::OutOfMemory {
            bytes: layout.size(),
        })?;
        Ok(Self { ptr, len, align })
    }

    /// Like [`try_zeroed`](Self::try_zeroed), but aborts on allocation
    /// failure the way `Vec` does.
    ///
    /// # Panics
    /// Panics on an invalid alignment or a size overflow.
    pub fn zeroed(len: usize, align: usize) -> Self {
        let layout = match Self::layout(len, align) {
            Ok(layout) => layout,
            Err(err) => panic!("{}", err),
        };
        match Self::try_zeroed(len, align) {
            Ok(buf) => buf,
            Err(_) => handle_alloc_error(layout),
        }
    }

    /// Allocate `len` copies of `value` aligned to `align` bytes.
    pub fn try_filled(len: usize, align: usize, value: T) -> Result<Self, AllocError> {
        let mut buf = Self::try_zeroed(len, align)?;
        buf.fill(value);
        Ok(buf)
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Alignment requested at construction, in bytes.
    #[inline]
    pub fn alignment(&self) -> usize {
        self.align
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: ptr is non-null, aligned, and valid for len initialized elements.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and &mut self guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Element> Drop for AlignedBuf<T> {
    fn drop(&mut self) {
        let bytes = self.len * size_of::<T>();
        if bytes == 0 {
            return;
        }
        // SAFETY: same size and alignment as the layout validated at construction.
        unsafe {
            let layout = Layout::from_size_align_unchecked(bytes, self.align);
            alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}

impl<T: Element> Clone for AlignedBuf<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::zeroed(self.len, self.align);
        copy.copy_from_slice(self.as_slice());
        copy
    }
}

impl<T: Element> Deref for AlignedBuf<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Element> DerefMut for AlignedBuf<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Element> fmt::Debug for AlignedBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedBuf")
            .field("len", &self.len)
            .field("align", &self.align)
            .finish()
    }
}

/// Untyped block from the global allocator with an explicit alignment.
#[derive(Debug)]
pub struct RawAligned {
    ptr: NonNull<u8>,
    bytes: usize,
    layout: Layout,
}

impl RawAligned {
    /// Allocate `bytes` (at least one) aligned to `align`.
    pub fn new(bytes: usize, align: usize) -> Result<Self, AllocError> {
        check_align(align, 1)?;
        let layout = Layout::from_size_align(bytes.max(1), align)
            .map_err(|_| AllocError::LayoutOverflow { len: bytes })?;
        // SAFETY: layout has non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw).ok_or(AllocError::OutOfMemory { bytes })?;
        Ok(Self { ptr, bytes, layout })
    }

    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// Requested size in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes == 0
    }

    #[inline]
    pub fn alignment(&self) -> usize {
        self.layout.align()
    }
}

impl Drop for RawAligned {
    fn drop(&mut self) {
        // SAFETY: allocated with exactly this layout.
        unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout) }
    }
}

/// Manually aligned block: over-allocates by `align` bytes and keeps the
/// original pointer in the word just before the aligned address.
#[derive(Debug)]
pub struct OverAligned {
    aligned: NonNull<u8>,
    bytes: usize,
    layout: Layout,
}

impl OverAligned {
    /// Allocate `bytes` aligned to `align`, which must be a power of two no
    /// smaller than a pointer.
    pub fn new(bytes: usize, align: usize) -> Result<Self, AllocError> {
        check_align(align, size_of::<*mut u8>())?;
        let total = bytes
            .checked_add(align)
            .ok_or(AllocError::LayoutOverflow { len: bytes })?;
        let layout = Layout::from_size_align(total, align_of::<*mut u8>())
            .map_err(|_| AllocError::LayoutOverflow { len: bytes })?;

        // SAFETY: total >= align > 0.
        let original = unsafe { alloc::alloc(layout) };
        if original.is_null() {
            return Err(AllocError::OutOfMemory { bytes: total });
        }

        // `original` is pointer-aligned, so the distance to the next `align`
        // boundary is in [size_of::<*mut u8>(), align]: always room for the stash.
        let offset = align - (original as usize & (align - 1));

        // SAFETY: offset <= align, so aligned + bytes stays inside the block,
        // and the stash slot lies in [original, aligned).
        unsafe {
            let aligned = original.add(offset);
            aligned.cast::<*mut u8>().sub(1).write(original);
            Ok(Self {
                aligned: NonNull::new_unchecked(aligned),
                bytes,
                layout,
            })
        }
    }

    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.aligned.as_ptr()
    }

    /// Requested size in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes == 0
    }

    /// Pointer handed out by the global allocator.
    pub fn original_ptr(&self) -> *const u8 {
        // SAFETY: the stash slot was written in `new` and is pointer-aligned.
        unsafe { self.aligned.as_ptr().cast::<*mut u8>().sub(1).read() }
    }
}

impl Drop for OverAligned {
    fn drop(&mut self) {
        let original = self.original_ptr() as *mut u8;
        // SAFETY: original came from alloc with this layout.
        unsafe { alloc::dealloc(original, self.layout) }
    }
}
