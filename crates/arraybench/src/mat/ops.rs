//! Operator implementations for matrix types.

use std::ops::Add;

use crate::simd::KernelDispatch;

use super::{Mat, MatRef};

// MatRef + MatRef
impl<'a, 'b, T> Add<&'b MatRef<'b, T>> for &'a MatRef<'a, T>
where
    T: KernelDispatch,
{
    type Output = Mat<T>;

    fn add(self, rhs: &'b MatRef<'b, T>) -> Mat<T> {
        MatRef::add(self, rhs)
    }
}

// MatRef + MatRef (by value, since MatRef is Copy)
impl<'a, 'b, T> Add<MatRef<'b, T>> for MatRef<'a, T>
where
    T: KernelDispatch,
{
    type Output = Mat<T>;

    fn add(self, rhs: MatRef<'b, T>) -> Mat<T> {
        MatRef::add(&self, &rhs)
    }
}

// &Mat + &Mat
impl<T> Add<&Mat<T>> for &Mat<T>
where
    T: KernelDispatch,
{
    type Output = Mat<T>;

    fn add(self, rhs: &Mat<T>) -> Mat<T> {
        Mat::add(self, rhs)
    }
}

// &Mat + MatRef
impl<'b, T> Add<MatRef<'b, T>> for &Mat<T>
where
    T: KernelDispatch,
{
    type Output = Mat<T>;

    fn add(self, rhs: MatRef<'b, T>) -> Mat<T> {
        MatRef::add(&self.as_ref(), &rhs)
    }
}

// Mat + Mat (consuming)
impl<T> Add<Mat<T>> for Mat<T>
where
    T: KernelDispatch,
{
    type Output = Mat<T>;

    fn add(self, rhs: Mat<T>) -> Mat<T> {
        Mat::add(&self, &rhs)
    }
}
