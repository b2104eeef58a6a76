//! Mutable matrix view.

use crate::element::Element;
use crate::simd::{fill_slice, KernelDispatch};

use super::MatRef;

/// Mutable row-major view, used as the destination of in-place operations.
#[derive(Debug)]
pub struct MatMut<'a, T: Element> {
    data: &'a mut [T],
    nrows: usize,
    ncols: usize,
    row_stride: usize,
}

impl<'a, T: Element> MatMut<'a, T> {
    /// Mutable view over contiguous row-major data.
    pub fn from_slice(data: &'a mut [T], nrows: usize, ncols: usize) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "data length {} != nrows {} * ncols {}",
            data.len(),
            nrows,
            ncols
        );
        Self {
            data,
            nrows,
            ncols,
            row_stride: ncols,
        }
    }

    /// Mutable view whose rows are `row_stride` elements apart.
    pub fn from_slice_with_stride(
        data: &'a mut [T],
        nrows: usize,
        ncols: usize,
        row_stride: usize,
    ) -> Self {
        assert!(
            row_stride >= ncols,
            "row stride {} shorter than ncols {}",
            row_stride,
            ncols
        );
        let need = if nrows == 0 || ncols == 0 {
            0
        } else {
            (nrows - 1) * row_stride + ncols
        };
        assert!(
            data.len() >= need,
            "data length {} too short for {}x{} with stride {}",
            data.len(),
            nrows,
            ncols,
            row_stride
        );
        Self {
            data: &mut data[..need],
            nrows,
            ncols,
            row_stride,
        }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.row_stride == self.ncols || self.nrows <= 1
    }

    /// Underlying storage when contiguous.
    #[inline]
    pub fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        if self.is_contiguous() {
            Some(&mut *self.data)
        } else {
            None
        }
    }

    /// Row `i` as a mutable slice.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i < self.nrows, "row index {} out of bounds {}", i, self.nrows);
        let start = i * self.row_stride;
        &mut self.data[start..start + self.ncols]
    }

    /// Reborrow as a read-only view.
    pub fn as_ref(&self) -> MatRef<'_, T> {
        MatRef::from_slice_with_stride(&*self.data, self.nrows, self.ncols, self.row_stride)
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.as_ref().get(i, j)
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        debug_assert!(
            j < self.ncols,
            "col index {} out of bounds {}",
            j,
            self.ncols
        );
        &mut self.row_mut(i)[j]
    }

    /// Copy every element of `src` into this view.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn copy_from(&mut self, src: &MatRef<'_, T>) {
        super::assert_same_shape(self.nrows, self.ncols, src.nrows(), src.ncols());
        for i in 0..self.nrows {
            self.row_mut(i).copy_from_slice(src.row(i));
        }
    }
}

impl<'a, T: KernelDispatch> MatMut<'a, T> {
    /// Set every viewed element to `value`.
    pub fn fill(&mut self, value: T) {
        if let Some(all) = self.as_mut_slice() {
            fill_slice(all, value);
            return;
        }
        for i in 0..self.nrows {
            fill_slice(self.row_mut(i), value);
        }
    }
}
