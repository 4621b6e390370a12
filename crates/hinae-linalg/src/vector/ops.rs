//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{Axis, MathError, Zero};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.elem(index)
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.elem_mut(index)
    }
}

impl<T, const N: usize> Index<Axis> for Vector<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, axis: Axis) -> &Self::Output {
        self.elem(axis.index())
    }
}

impl<T, const N: usize> IndexMut<Axis> for Vector<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        self.elem_mut(axis.index())
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, const N: usize> Add<Vector<T, N>> for Vector<T, N>
where
    T: Add,
{
    type Output = Vector<T::Output, N>;

    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip_with(rhs, |l, r| l + r)
    }
}

/// Element-wise addition.
impl<T, const N: usize> AddAssign<Vector<T, N>> for Vector<T, N>
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

/// Vector-Scalar addition (adds the scalar to every element).
impl<T, const N: usize> Add<T> for Vector<T, N>
where
    T: Add + Copy,
{
    type Output = Vector<T::Output, N>;

    fn add(self, rhs: T) -> Self::Output {
        self.map(|elem| elem + rhs)
    }
}

/// Vector-Scalar addition (adds the scalar to every element).
impl<T, const N: usize> AddAssign<T> for Vector<T, N>
where
    T: AddAssign + Copy,
{
    fn add_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|lhs| *lhs += rhs);
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> Sub<Vector<T, N>> for Vector<T, N>
where
    T: Sub,
{
    type Output = Vector<T::Output, N>;

    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip_with(rhs, |l, r| l - r)
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> SubAssign<Vector<T, N>> for Vector<T, N>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Vector-Scalar subtraction (subtracts the scalar from every element).
impl<T, const N: usize> Sub<T> for Vector<T, N>
where
    T: Sub + Copy,
{
    type Output = Vector<T::Output, N>;

    fn sub(self, rhs: T) -> Self::Output {
        self.map(|elem| elem - rhs)
    }
}

/// Vector-Scalar subtraction (subtracts the scalar from every element).
impl<T, const N: usize> SubAssign<T> for Vector<T, N>
where
    T: SubAssign + Copy,
{
    fn sub_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|lhs| *lhs -= rhs);
    }
}

/// Element-wise multiplication.
impl<T, const N: usize> Mul<Vector<T, N>> for Vector<T, N>
where
    T: Mul,
{
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip_with(rhs, |a, b| a * b)
    }
}

/// Element-wise multiplication.
impl<T, const N: usize> MulAssign<Vector<T, N>> for Vector<T, N>
where
    T: MulAssign,
{
    fn mul_assign(&mut self, rhs: Vector<T, N>) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs *= rhs);
    }
}

// NB: both vector-scalar and element-wise vector-vector impls exist for every arithmetic operator,
// which rules out a more generic `Mul<U> for Vector<T, N> where T: Mul<U>`.

/// Vector-Scalar multiplication (scaling).
impl<T, const N: usize> Mul<T> for Vector<T, N>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T, const N: usize> MulAssign<T> for Vector<T, N>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

/// Element-wise division.
///
/// Zero elements in `rhs` are not checked; they behave like division by zero does for `T`.
impl<T, const N: usize> Div<Vector<T, N>> for Vector<T, N>
where
    T: Div,
{
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip_with(rhs, |a, b| a / b)
    }
}

/// Element-wise division.
impl<T, const N: usize> DivAssign<Vector<T, N>> for Vector<T, N>
where
    T: DivAssign,
{
    fn div_assign(&mut self, rhs: Vector<T, N>) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs /= rhs);
    }
}

/// Vector-Scalar division (scaling).
///
/// # Panics
///
/// Panics with [`MathError::DivisionByZero`] if `rhs` is zero.
impl<T, const N: usize> Div<T> for Vector<T, N>
where
    T: Div + Zero + PartialEq + Copy,
{
    type Output = Vector<T::Output, N>;

    #[track_caller]
    fn div(self, rhs: T) -> Self::Output {
        if rhs == T::ZERO {
            MathError::DivisionByZero.raise();
        }
        self.map(|elem| elem / rhs)
    }
}

/// Vector-Scalar division (scaling).
///
/// # Panics
///
/// Panics with [`MathError::DivisionByZero`] if `rhs` is zero.
impl<T, const N: usize> DivAssign<T> for Vector<T, N>
where
    T: DivAssign + Zero + PartialEq + Copy,
{
    #[track_caller]
    fn div_assign(&mut self, rhs: T) {
        if rhs == T::ZERO {
            MathError::DivisionByZero.raise();
        }
        self.0.iter_mut().for_each(|lhs| *lhs /= rhs);
    }
}

// Scalar-Vector addition and multiplication, for every primitive element type. These can't be
// generic over `T` because of the orphan rules.
macro_rules! scalar_lhs_ops {
    ($($types:ty),+) => {
        $(
            impl<const N: usize> Add<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                fn add(self, rhs: Vector<$types, N>) -> Self::Output {
                    rhs.map(|elem| self + elem)
                }
            }

            impl<const N: usize> Mul<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                fn mul(self, rhs: Vector<$types, N>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }
        )+
    };
}
scalar_lhs_ops!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Vector3};

    #[test]
    fn arithmetic() {
        let a = vec3(0, 1, 2);
        let b = vec3(2, 4, 8);
        assert_eq!(a + b, vec3(2, 5, 10));
        assert_eq!(b - a, vec3(2, 3, 6));
        assert_eq!(a * b, vec3(0, 4, 16));
        assert_eq!(b / vec3(1, 2, 4), vec3(2, 2, 2));
        assert_eq!(-a, vec3(0, -1, -2));
        assert_eq!(a + (-a), Vector3::ZERO);
    }

    #[test]
    fn scalar_broadcast() {
        let v = vec3(2, 4, 8);
        assert_eq!(v + 1, vec3(3, 5, 9));
        assert_eq!(v - 2, vec3(0, 2, 6));
        assert_eq!(v * 2, vec3(4, 8, 16));
        assert_eq!(v / 2, vec3(1, 2, 4));
        assert_eq!(2 + v, v + 2);
        assert_eq!(2 * v, v * 2);
        assert_eq!(vec3(2.0f32, 4.0, 8.0) / 2.0, vec3(1.0, 2.0, 4.0));
    }

    #[test]
    fn compound_assignment() {
        let mut v = vec2(1.0, 2.0);
        v += vec2(1.0, 1.0);
        assert_eq!(v, vec2(2.0, 3.0));
        v -= 1.0;
        assert_eq!(v, vec2(1.0, 2.0));
        v *= vec2(3.0, 0.5);
        assert_eq!(v, vec2(3.0, 1.0));
        v *= 2.0;
        assert_eq!(v, vec2(6.0, 2.0));
        v /= vec2(3.0, 2.0);
        assert_eq!(v, vec2(2.0, 1.0));
        v /= 4.0;
        assert_eq!(v, vec2(0.5, 0.25));
        v += 0.5;
        v -= vec2(1.0, 0.75);
        assert_eq!(v, vec2(0.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn divide_by_zero_scalar() {
        let _ = vec3(1.0, 2.0, 3.0) / 0.0;
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn divide_assign_by_zero_scalar() {
        let mut v = vec2(1, 2);
        v /= 0;
    }
}
