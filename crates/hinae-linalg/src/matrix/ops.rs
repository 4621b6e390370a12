use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::{dot, MathError, Number, Point, Vector};

use super::Matrix4;

impl<T> Index<(usize, usize)> for Matrix4<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        self.elem(row, col)
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix4<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        self.elem_mut(row, col)
    }
}

/// Matrix-Scalar multiplication.
impl<T: Number> Mul<T> for Matrix4<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix-Scalar multiplication.
impl<T: Number> MulAssign<T> for Matrix4<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Matrix multiplication.
impl<T: Number> Mul for Matrix4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| dot(self.row(row), rhs.col(col)))
    }
}

/// Matrix multiplication.
impl<T: Number> MulAssign for Matrix4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Transforms a homogeneous vector.
impl<T: Number> Mul<Vector<T, 4>> for Matrix4<T> {
    type Output = Vector<T, 4>;

    fn mul(self, rhs: Vector<T, 4>) -> Self::Output {
        Vector::from_fn(|row| dot(self.row(row), rhs))
    }
}

/// Transforms a direction.
///
/// Only the upper-left 3x3 part of the matrix is used, so translation does not affect directions.
impl<T: Number> Mul<Vector<T, 3>> for Matrix4<T> {
    type Output = Vector<T, 3>;

    fn mul(self, rhs: Vector<T, 3>) -> Self::Output {
        (self * rhs.extend(T::ZERO)).truncate()
    }
}

/// Transforms a point.
///
/// The point is extended with `w = 1`. If the transformed W coordinate is not 1 (as happens with
/// projection matrices), the result is divided by it.
///
/// # Panics
///
/// Panics with [`MathError::DivisionByZero`] if the transformed W coordinate is 0.
impl<T: Number> Mul<Point<T, 3>> for Matrix4<T> {
    type Output = Point<T, 3>;

    #[track_caller]
    fn mul(self, rhs: Point<T, 3>) -> Self::Output {
        let [x, y, z] = rhs.0;
        let [x, y, z, w] = (self * Vector([x, y, z, T::ONE])).0;
        if w == T::ONE {
            return Point([x, y, z]);
        }
        if w == T::ZERO {
            MathError::DivisionByZero.raise();
        }
        Point([x / w, y / w, z / w])
    }
}

#[cfg(test)]
mod tests {
    use crate::{point3, vec3, vec4, Matrix4, Matrix4f, Matrix4i};

    #[rustfmt::skip]
    #[test]
    fn matmul() {
        let a = Matrix4::new(
            1, 2, 0, 0,
            0, 1, 0, 0,
            0, 0, 1, 3,
            0, 0, 0, 1,
        );
        let b = Matrix4::new(
            1, 0, 0, 0,
            4, 1, 0, 0,
            0, 0, 2, 0,
            0, 0, 0, 1,
        );
        assert_eq!(a * b, Matrix4::new(
            9, 2, 0, 0,
            4, 1, 0, 0,
            0, 0, 2, 3,
            0, 0, 0, 1,
        ));
        assert_ne!(a * b, b * a);

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
        c *= 2;
        assert_eq!(c, (a * b) * 2);
    }

    #[rustfmt::skip]
    #[test]
    fn transform_vectors_and_points() {
        let translate = Matrix4::new(
            1.0, 0.0, 0.0, 5.0,
            0.0, 1.0, 0.0, 6.0,
            0.0, 0.0, 1.0, 7.0,
            0.0, 0.0, 0.0, 1.0,
        );
        assert_eq!(translate * vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0));
        assert_eq!(translate * point3(1.0, 2.0, 3.0), point3(6.0, 8.0, 10.0));
        assert_eq!(translate * vec4(1.0, 2.0, 3.0, 1.0), vec4(6.0, 8.0, 10.0, 1.0));
        assert_eq!(translate * vec4(1.0, 2.0, 3.0, 0.0), vec4(1.0, 2.0, 3.0, 0.0));

        let id = Matrix4i::IDENTITY;
        assert_eq!(id * vec4(1, 2, 3, 4), vec4(1, 2, 3, 4));
        assert_eq!(id * point3(1, 2, 3), point3(1, 2, 3));
    }

    #[test]
    fn homogeneous_divide() {
        let mut m = Matrix4f::IDENTITY;
        m[(3, 3)] = 2.0;
        assert_eq!(m * point3(2.0, 4.0, 6.0), point3(1.0, 2.0, 3.0));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn point_at_infinity() {
        let mut m = Matrix4f::IDENTITY;
        m[(3, 3)] = 0.0;
        let _ = m * point3(2.0, 4.0, 6.0);
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn index_out_of_range() {
        let m = Matrix4i::IDENTITY;
        let _ = m[(0, 4)];
    }
}
