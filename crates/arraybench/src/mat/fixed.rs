//! Fixed-shape matrix with compile-time dimensions.

use std::ops::{Add, Index, IndexMut};

use crate::element::Element;

/// `R x C` matrix whose shape is part of the type.
///
/// Storage is boxed so large shapes (512x512) do not land on the stack.
/// With the extent known at compile time the add loop needs no bounds
/// checks and is left to the auto-vectorizer.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedMat<T: Element, const R: usize, const C: usize> {
    data: Box<[[T; C]; R]>,
}

impl<T: Element, const R: usize, const C: usize> FixedMat<T, R, C> {
    pub fn zeros() -> Self {
        let rows: Box<[[T; C]]> = vec![[T::ZERO; C]; R].into_boxed_slice();
        // The vec has exactly R rows.
        let data = rows.try_into().unwrap_or_else(|_| unreachable!());
        Self { data }
    }

    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut mat = Self::zeros();
        for (i, row) in mat.data.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = f(i, j);
            }
        }
        mat
    }

    #[inline]
    pub const fn nrows(&self) -> usize {
        R
    }

    #[inline]
    pub const fn ncols(&self) -> usize {
        C
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Elementwise sum into a preallocated matrix of the same shape.
    #[inline]
    pub fn add_to(&self, rhs: &Self, out: &mut Self) {
        for ((o, a), b) in out.data.iter_mut().zip(self.data.iter()).zip(rhs.data.iter()) {
            for j in 0..C {
                o[j] = a[j] + b[j];
            }
        }
    }
}

impl<T: Element, const R: usize, const C: usize> Default for FixedMat<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Element, const R: usize, const C: usize> Index<(usize, usize)> for FixedMat<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i][j]
    }
}

impl<T: Element, const R: usize, const C: usize> IndexMut<(usize, usize)> for FixedMat<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i][j]
    }
}

impl<T: Element, const R: usize, const C: usize> Add for &FixedMat<T, R, C> {
    type Output = FixedMat<T, R, C>;

    fn add(self, rhs: Self) -> FixedMat<T, R, C> {
        let mut out = FixedMat::zeros();
        self.add_to(rhs, &mut out);
        out
    }
}
