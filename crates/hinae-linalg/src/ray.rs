use std::fmt;

use crate::{Axis, MathError, Number, Point3, Vector3};

/// A ray with [`f32`] elements.
pub type Ray3f = Ray3<f32>;
/// A ray with [`f64`] elements.
pub type Ray3d = Ray3<f64>;
/// A ray with [`isize`] elements.
pub type Ray3i = Ray3<isize>;

/// A half-line in 3D space, starting at `origin` and extending along `direction`.
///
/// The points on the ray are `origin + direction * t` for `t >= 0`. The direction does not need to
/// be normalized; `t` is measured in multiples of its length.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// let ray = Ray3::new(point3(0, 0, 0), vec3(1, 2, 3));
/// assert_eq!(ray.at(2), point3(2, 4, 6));
/// assert_eq!(ray.inv_at(point3(2, 4, 6)), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ray3<T> {
    /// The point the ray starts at.
    pub origin: Point3<T>,
    /// The direction the ray is pointing in.
    pub direction: Vector3<T>,
}

impl<T> Ray3<T> {
    #[inline]
    pub const fn new(origin: Point3<T>, direction: Vector3<T>) -> Self {
        Self { origin, direction }
    }
}

impl<T: Number> Ray3<T> {
    /// Returns the point at parameter `t` along the ray.
    pub fn at(&self, t: T) -> Point3<T> {
        self.origin + self.direction * t
    }

    /// Returns the `axis` coordinate of the point at parameter `t`.
    ///
    /// This is the same as `self.at(t)[axis]`, without computing the other coordinates.
    pub fn at_axis(&self, t: T, axis: Axis) -> T {
        self.origin[axis] + self.direction[axis] * t
    }

    /// Solves for the parameter `t` at which the ray reaches the X coordinate of `p`.
    ///
    /// The Y and Z coordinates of `p` are ignored. Returns [`MathError::DivisionByZero`] if the
    /// ray is parallel to the YZ plane.
    pub fn checked_inv_at(&self, p: Point3<T>) -> Result<T, MathError> {
        self.checked_inv_at_axis(p, Axis::X)
    }

    /// Solves for the parameter `t` at which the ray reaches the `axis` coordinate of `p`.
    ///
    /// This is where the ray crosses the axis-aligned plane through `p`, which is what slab tests
    /// against [`Bounds3`](crate::Bounds3) need. Returns [`MathError::DivisionByZero`] if the
    /// ray runs parallel to that plane.
    pub fn checked_inv_at_axis(&self, p: Point3<T>, axis: Axis) -> Result<T, MathError> {
        let d = self.direction[axis];
        if d == T::ZERO {
            return Err(MathError::DivisionByZero);
        }
        Ok((p[axis] - self.origin[axis]) / d)
    }

    /// Solves for the parameter `t` at which the ray reaches the X coordinate of `p`.
    ///
    /// # Panics
    ///
    /// Panics with [`MathError::DivisionByZero`] if the X component of the direction is zero.
    #[track_caller]
    pub fn inv_at(&self, p: Point3<T>) -> T {
        self.inv_at_axis(p, Axis::X)
    }

    /// Solves for the parameter `t` at which the ray reaches the `axis` coordinate of `p`.
    ///
    /// # Panics
    ///
    /// Panics with [`MathError::DivisionByZero`] if the direction is zero along `axis`.
    #[track_caller]
    pub fn inv_at_axis(&self, p: Point3<T>, axis: Axis) -> T {
        match self.checked_inv_at_axis(p, axis) {
            Ok(t) => t,
            Err(e) => e.raise(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Ray3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ray3")
            .field("origin", &self.origin)
            .field("direction", &self.direction)
            .finish()
    }
}

/// Formats the ray as `origin + t * direction`.
impl<T: fmt::Display> fmt::Display for Ray3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + t * {}", self.origin, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{point3, vec3};

    #[test]
    fn evaluate() {
        let ray = Ray3::new(point3(0, 0, 0), vec3(1, 2, 3));
        assert_eq!(ray.at(0), ray.origin);
        assert_eq!(ray.at(2), point3(2, 4, 6));

        let ray = Ray3::new(point3(1.0, -1.0, 0.5), vec3(0.5, 0.0, -1.0));
        assert_eq!(ray.at(4.0), point3(3.0, -1.0, -3.5));
        for axis in Axis::ALL {
            assert_eq!(ray.at_axis(4.0, axis), ray.at(4.0)[axis]);
        }
    }

    #[test]
    fn solve_for_t() {
        let ray = Ray3::new(point3(1.0, 1.0, 1.0), vec3(2.0, 0.0, -4.0));
        assert_eq!(ray.inv_at(point3(5.0, 100.0, 100.0)), 2.0);
        assert_eq!(ray.inv_at_axis(point3(0.0, 0.0, -1.0), Axis::Z), 0.5);
        assert_eq!(
            ray.checked_inv_at_axis(point3(0.0, 0.0, 0.0), Axis::Y),
            Err(MathError::DivisionByZero)
        );

        let t = 1.25;
        assert_eq!(ray.inv_at(ray.at(t)), t);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn solve_parallel() {
        let ray = Ray3::new(point3(0, 0, 0), vec3(0, 1, 0));
        ray.inv_at(point3(1, 1, 1));
    }

    #[test]
    fn ordering() {
        let a = Ray3::new(point3(0, 0, 0), vec3(1, 0, 0));
        let b = Ray3::new(point3(0, 0, 1), vec3(0, 0, 0));
        let c = Ray3::new(point3(0, 0, 1), vec3(0, 1, 0));
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a.max(c), c);
    }

    #[test]
    fn fmt() {
        let ray = Ray3::new(point3(0, 0, 0), vec3(1, 2, 3));
        assert_eq!(ray.to_string(), "(0, 0, 0) + t * (1, 2, 3)");
    }
}
