//! Owned matrix type.

use std::ops::{Index, IndexMut};

use crate::alloc::{AlignedBuf, DEFAULT_ALIGN};
use crate::element::Element;
use crate::simd::{add_slices, fill_slice, KernelDispatch};

use super::{MatMut, MatRef};

/// Owned row-major matrix on [`DEFAULT_ALIGN`]-byte aligned storage.
///
/// The first element always starts on a batch boundary, so the peeled
/// kernels skip the scalar prefix for whole-matrix operations:
///
/// ```
/// use arraybench::Mat;
///
/// let a = Mat::<f64>::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
/// let b = Mat::<f64>::from_row_major(&[1.0; 6], 2, 3);
/// let c = &a + &b;
/// assert_eq!(c[(1, 2)], 6.0);
/// ```
#[derive(Debug, Clone)]
pub struct Mat<T: Element> {
    pub(crate) data: AlignedBuf<T>,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
}

impl<T: Element> Mat<T> {
    /// Create a zero-filled matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: AlignedBuf::zeroed(nrows * ncols, DEFAULT_ALIGN),
            nrows,
            ncols,
        }
    }

    /// Create a matrix from a function of (row, col).
    pub fn from_fn<F>(nrows: usize, ncols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut mat = Self::zeros(nrows, ncols);
        for (idx, v) in mat.data.iter_mut().enumerate() {
            *v = f(idx / ncols, idx % ncols);
        }
        mat
    }

    /// Copy row-major data into a new matrix.
    pub fn from_row_major(data: &[T], nrows: usize, ncols: usize) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "data length {} != nrows {} * ncols {}",
            data.len(),
            nrows,
            ncols
        );
        let mut mat = Self::zeros(nrows, ncols);
        mat.data.copy_from_slice(data);
        mat
    }

    /// Move a row-major vector into aligned storage.
    pub fn from_vec(data: Vec<T>, nrows: usize, ncols: usize) -> Self {
        Self::from_row_major(&data, nrows, ncols)
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Value at (i, j).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }

    /// Row-major iterator over all elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Borrow as a full view.
    #[inline]
    pub fn as_ref(&self) -> MatRef<'_, T> {
        MatRef::from_slice(&self.data, self.nrows, self.ncols)
    }

    /// Borrow as a full mutable view.
    #[inline]
    pub fn as_mut(&mut self) -> MatMut<'_, T> {
        MatMut::from_slice(&mut self.data, self.nrows, self.ncols)
    }

    /// View of the `nrows x ncols` block starting at (row, col).
    pub fn submatrix(&self, row: usize, col: usize, nrows: usize, ncols: usize) -> MatRef<'_, T> {
        self.as_ref().submatrix(row, col, nrows, ncols)
    }
}

impl<T: KernelDispatch> Mat<T> {
    /// Set every element to `value` with the splat kernel.
    pub fn fill(&mut self, value: T) {
        fill_slice(&mut self.data, value);
    }

    /// Elementwise sum into a fresh matrix.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn add(&self, rhs: &Mat<T>) -> Mat<T> {
        let mut out = Mat::zeros(self.nrows, self.ncols);
        self.add_to(rhs, &mut out);
        out
    }

    /// Elementwise sum into a preallocated matrix.
    ///
    /// `out` cannot alias either operand, so no temporary is needed.
    ///
    /// # Panics
    ///
    /// Panics if any of the three shapes differ.
    pub fn add_to(&self, rhs: &Mat<T>, out: &mut Mat<T>) {
        super::assert_same_shape(self.nrows, self.ncols, rhs.nrows, rhs.ncols);
        super::assert_same_shape(self.nrows, self.ncols, out.nrows, out.ncols);
        add_slices(&self.data, &rhs.data, &mut out.data);
    }
}

impl<T: Element> Index<(usize, usize)> for Mat<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
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
        &self.data[i * self.ncols + j]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Mat<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
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
        &mut self.data[i * self.ncols + j]
    }
}

impl<'a, T: Element> IntoIterator for &'a Mat<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
