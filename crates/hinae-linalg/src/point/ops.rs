//! The affine operations on points.

use std::ops::{Add, AddAssign, Index, IndexMut, Neg, Sub};

use crate::{Axis, Vector};

use super::Point;

impl<T, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.elem(index)
    }
}

impl<T, const N: usize> IndexMut<usize> for Point<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.elem_mut(index)
    }
}

impl<T, const N: usize> Index<Axis> for Point<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, axis: Axis) -> &Self::Output {
        self.elem(axis.index())
    }
}

impl<T, const N: usize> IndexMut<Axis> for Point<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        self.elem_mut(axis.index())
    }
}

/// Negating a point yields the vector pointing from it to the origin.
impl<T, const N: usize> Neg for Point<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        Vector(self.0.map(T::neg))
    }
}

/// Point - Point yields the displacement between them.
impl<T, const N: usize> Sub for Point<T, N>
where
    T: Sub,
{
    type Output = Vector<T::Output, N>;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector(self.0).zip_with(Vector(rhs.0), |l, r| l - r)
    }
}

/// Point + Vector offsets the point.
impl<T, const N: usize> Add<Vector<T, N>> for Point<T, N>
where
    T: Add,
{
    type Output = Point<T::Output, N>;

    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        Point(Vector(self.0).zip_with(rhs, |l, r| l + r).0)
    }
}

/// Point + Vector offsets the point.
impl<T, const N: usize> AddAssign<Vector<T, N>> for Point<T, N>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}
