use std::{
    fmt,
    ops::{Add, Mul},
};

use crate::{cross, scalar, Components, MathError, Number, Point2, Point3};

/// A triangle with [`f32`] vertices.
pub type Trianglef = Triangle<f32>;
/// A triangle with [`f64`] vertices.
pub type Triangled = Triangle<f64>;
/// A triangle with [`isize`] vertices.
pub type Trianglei = Triangle<isize>;

/// A triangle in 3D space, given by its three vertices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Triangle<T> {
    pub a: Point3<T>,
    pub b: Point3<T>,
    pub c: Point3<T>,
}

impl<T> Triangle<T> {
    #[inline]
    pub const fn new(a: Point3<T>, b: Point3<T>, c: Point3<T>) -> Self {
        Self { a, b, c }
    }
}

impl<T: Number> Triangle<T> {
    /// Computes the barycentric coordinates of `p` relative to the XY projection of the triangle.
    ///
    /// `beta` and `gamma` are the signed areas of the sub-triangles `CAP` and `ABP`, divided by the
    /// signed area of the whole triangle; `alpha` is `1 - beta - gamma`. The result does not depend
    /// on the winding order of the vertices. A point on an edge or vertex gets a coordinate of
    /// exactly zero and counts as [inside](BarycentricCoordinates::is_inside).
    ///
    /// # Panics
    ///
    /// Panics with [`MathError::DivisionByZero`] if the projected triangle is degenerate (has zero
    /// area).
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// let tri = Triangle::new(point3(2.0, 0.0, 0.0), point3(0.0, 2.0, 0.0), point3(0.0, 0.0, 0.0));
    ///
    /// let bc = tri.barycentric_2d(point2(0.25, 0.25));
    /// assert!(bc.is_inside());
    /// assert_eq!((bc.alpha, bc.beta, bc.gamma), (0.125, 0.125, 0.75));
    ///
    /// assert!(tri.barycentric_2d(point2(2.0, 2.0)).is_negative());
    /// ```
    #[track_caller]
    pub fn barycentric_2d(&self, p: Point2<T>) -> BarycentricCoordinates<T> {
        let (a, b, c) = (self.a.truncate(), self.b.truncate(), self.c.truncate());

        let area = cross(b - a, c - b);
        if area == T::ZERO {
            MathError::DivisionByZero.raise();
        }

        let (ap, bp, cp) = (p - a, p - b, p - c);
        let beta = cross(cp, ap) / area;
        let gamma = cross(ap, bp) / area;
        let alpha = T::ONE - beta - gamma;
        BarycentricCoordinates { alpha, beta, gamma }
    }

    /// Returns `true` if `p` lies inside or on the edge of the XY projection of the triangle.
    ///
    /// Both clockwise and counter-clockwise triangles are accepted.
    ///
    /// # Panics
    ///
    /// Panics with [`MathError::DivisionByZero`] if the projected triangle has zero area, like
    /// [`Triangle::barycentric_2d`] does.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// let ccw = Triangle::new(point3(0, 0, 0), point3(4, 0, 0), point3(0, 4, 0));
    /// let cw = Triangle::new(ccw.a, ccw.c, ccw.b);
    /// for tri in [ccw, cw] {
    ///     assert!(tri.contains_2d(point2(1, 1)));
    ///     assert!(tri.contains_2d(point2(2, 2)));
    ///     assert!(!tri.contains_2d(point2(3, 3)));
    /// }
    /// ```
    pub fn contains_2d(&self, p: Point2<T>) -> bool {
        let (a, b, c) = (self.a.truncate(), self.b.truncate(), self.c.truncate());
        if cross(b - a, c - b) == T::ZERO {
            MathError::DivisionByZero.raise();
        }

        let edges = [cross(b - a, p - a), cross(c - b, p - b), cross(a - c, p - c)];
        edges.iter().all(|&e| e >= T::ZERO) || edges.iter().all(|&e| e <= T::ZERO)
    }
}

/// Formats the triangle as `Triangle:` followed by its vertices on the next line.
impl<T: fmt::Display> fmt::Display for Triangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle:\n{}{}{}", self.a, self.b, self.c)
    }
}

/// Barycentric coordinates of a point relative to a [`Triangle`].
///
/// The point is `alpha * A + beta * B + gamma * C`. Inside the triangle all three weights are
/// non-negative and sum to 1.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct BarycentricCoordinates<T> {
    pub alpha: T,
    pub beta: T,
    pub gamma: T,
}

impl<T: Number> BarycentricCoordinates<T> {
    #[inline]
    pub const fn new(alpha: T, beta: T, gamma: T) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Returns `true` if no coordinate is negative.
    pub fn is_inside(&self) -> bool {
        self.alpha >= T::ZERO && self.beta >= T::ZERO && self.gamma >= T::ZERO
    }

    /// Returns `true` if at least one coordinate is negative.
    pub fn is_negative(&self) -> bool {
        self.alpha < T::ZERO || self.beta < T::ZERO || self.gamma < T::ZERO
    }

    /// Corrects screen-space weights for perspective.
    ///
    /// Each weight is divided by the view-space depth of its vertex. Returns the reciprocal of the
    /// sum of the new weights, which is the interpolated depth of the point; use it as the `w`
    /// argument of [`interpolate`](Self::interpolate) to undo the division.
    ///
    /// # Panics
    ///
    /// Panics with [`MathError::DivisionByZero`] if any depth is zero, or if the corrected weights
    /// sum to zero.
    #[track_caller]
    pub fn perspective_correct(&mut self, z1: T, z2: T, z3: T) -> T {
        if z1 == T::ZERO || z2 == T::ZERO || z3 == T::ZERO {
            MathError::DivisionByZero.raise();
        }
        self.alpha = self.alpha / z1;
        self.beta = self.beta / z2;
        self.gamma = self.gamma / z3;

        scalar::reciprocal(self.alpha + self.beta + self.gamma)
    }

    /// Interpolates the per-vertex values `t1`, `t2`, `t3` and scales the result by `w`.
    ///
    /// Works for scalars and [`Vector`](crate::Vector)s. Points can't be scaled, so they go through
    /// [`interpolate_components`](Self::interpolate_components) instead.
    pub fn interpolate<U>(&self, t1: U, t2: U, t3: U, w: T) -> U
    where
        U: Mul<T, Output = U> + Add<Output = U>,
    {
        (t1 * self.alpha + t2 * self.beta + t3 * self.gamma) * w
    }

    /// Interpolates each field of the per-vertex values and scales the result by `w`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// let bc = BarycentricCoordinates::new(0.5, 0.25, 0.25);
    /// let p = bc.interpolate_components(point2(0.0, 0.0), point2(4.0, 0.0), point2(0.0, 8.0), 1.0);
    /// assert_eq!(p, point2(1.0, 2.0));
    /// ```
    pub fn interpolate_components<G>(&self, t1: G, t2: G, t3: G, w: T) -> G
    where
        G: Components<Scalar = T>,
    {
        G::from_components(|i| {
            (self.alpha * t1.component(i) + self.beta * t2.component(i)
                + self.gamma * t3.component(i))
                * w
        })
    }
}
