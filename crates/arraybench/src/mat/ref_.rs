//! Immutable matrix view.

use crate::element::Element;
use crate::simd::{add_slices, KernelDispatch};

use super::{Mat, MatMut};

/// Read-only row-major view, possibly a sub-block of a larger matrix.
///
/// Rows are `row_stride` elements apart; a full view has
/// `row_stride == ncols`.
///
/// ```
/// use arraybench::{Mat, MatRef};
///
/// let data = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let a = MatRef::from_slice(&data, 2, 3);
/// let right = a.submatrix(0, 1, 2, 2);
///
/// assert_eq!(right.get(1, 0), 5.0);
/// assert!(!right.is_contiguous());
/// ```
#[derive(Debug)]
pub struct MatRef<'a, T: Element> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
    row_stride: usize,
}

impl<'a, T: Element> Copy for MatRef<'a, T> {}

impl<'a, T: Element> Clone for MatRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

fn required_len(nrows: usize, ncols: usize, row_stride: usize) -> usize {
    if nrows == 0 || ncols == 0 {
        0
    } else {
        (nrows - 1) * row_stride + ncols
    }
}

impl<'a, T: Element> MatRef<'a, T> {
    /// View contiguous row-major data of length `nrows * ncols`.
    pub fn from_slice(data: &'a [T], nrows: usize, ncols: usize) -> Self {
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

    /// View row-major data whose rows are `row_stride` elements apart.
    pub fn from_slice_with_stride(
        data: &'a [T],
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
        let need = required_len(nrows, ncols, row_stride);
        assert!(
            data.len() >= need,
            "data length {} too short for {}x{} with stride {}",
            data.len(),
            nrows,
            ncols,
            row_stride
        );
        Self {
            data: &data[..need],
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

    /// Distance between row starts, in elements.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Whether the rows are packed back to back.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.row_stride == self.ncols || self.nrows <= 1
    }

    /// Underlying storage when contiguous.
    #[inline]
    pub fn as_slice(&self) -> Option<&'a [T]> {
        self.is_contiguous().then_some(self.data)
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &'a [T] {
        assert!(i < self.nrows, "row index {} out of bounds {}", i, self.nrows);
        let start = i * self.row_stride;
        &self.data[start..start + self.ncols]
    }

    /// Value at (i, j).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        debug_assert!(
            i < self.nrows,
            "row index {} out of bounds {}",
            i,
            self.nrows
        );
        debug_assert!(
            j < self.ncols,
            "col index {} out of bounds {}",
            j,
            self.ncols
        );
        self.data[i * self.row_stride + j]
    }

    /// View of the `nrows x ncols` block starting at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the block does not fit.
    pub fn submatrix(&self, row: usize, col: usize, nrows: usize, ncols: usize) -> MatRef<'a, T> {
        assert!(
            row + nrows <= self.nrows && col + ncols <= self.ncols,
            "submatrix {}x{} at ({}, {}) out of bounds for {}x{}",
            nrows,
            ncols,
            row,
            col,
            self.nrows,
            self.ncols
        );
        let need = required_len(nrows, ncols, self.row_stride);
        let data = if need == 0 {
            &self.data[..0]
        } else {
            let start = row * self.row_stride + col;
            &self.data[start..start + need]
        };
        MatRef {
            data,
            nrows,
            ncols,
            row_stride: self.row_stride,
        }
    }

    /// Row-major walk over the viewed elements, skipping stride gaps.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let view = *self;
        (0..view.nrows).flat_map(move |i| view.row(i).iter())
    }

    /// Copy the viewed block into a new owned matrix.
    pub fn to_owned(&self) -> Mat<T> {
        let mut out = Mat::zeros(self.nrows, self.ncols);
        out.as_mut().copy_from(self);
        out
    }
}

impl<'a, T: KernelDispatch> MatRef<'a, T> {
    /// Elementwise sum into a fresh matrix.
    pub fn add(&self, rhs: &MatRef<'_, T>) -> Mat<T> {
        let mut out = Mat::zeros(self.nrows, self.ncols);
        self.add_to(rhs, &mut out.as_mut());
        out
    }

    /// Elementwise sum into a preallocated view.
    ///
    /// Contiguous operands run the kernel once over the whole buffer;
    /// strided ones run it per row.
    ///
    /// # Panics
    ///
    /// Panics if any of the three shapes differ.
    pub fn add_to(&self, rhs: &MatRef<'_, T>, out: &mut MatMut<'_, T>) {
        super::assert_same_shape(self.nrows, self.ncols, rhs.nrows, rhs.ncols);
        super::assert_same_shape(self.nrows, self.ncols, out.nrows(), out.ncols());

        if let (Some(a), Some(b), Some(c)) = (self.as_slice(), rhs.as_slice(), out.as_mut_slice()) {
            add_slices(a, b, c);
            return;
        }
        for i in 0..self.nrows {
            add_slices(self.row(i), rhs.row(i), out.row_mut(i));
        }
    }
}
