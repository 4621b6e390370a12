use std::ops::{Mul, MulAssign};

use crate::{cross, dot, Number};

use super::Quaternion;

/// The Hamilton product.
///
/// Not commutative: `a * b` applies `b` first, then `a`.
impl<T: Number> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            v: rhs.v * self.w + self.v * rhs.w + cross(self.v, rhs.v),
            w: self.w * rhs.w - dot(self.v, rhs.v),
        }
    }
}

/// The Hamilton product.
impl<T: Number> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
