use std::{array, fmt};

use crate::{error::check_index, CastFrom, Number, Sqrt, Zero};

mod ops;

/// A location in the plane.
pub type Point2<T> = Point<T, 2>;
/// A 2-dimensional point with [`f32`] elements.
pub type Point2f = Point2<f32>;
/// A 2-dimensional point with [`f64`] elements.
pub type Point2d = Point2<f64>;
/// A 2-dimensional point with [`isize`] elements.
pub type Point2i = Point2<isize>;
/// A location in 3D space.
pub type Point3<T> = Point<T, 3>;
/// A 3-dimensional point with [`f32`] elements.
pub type Point3f = Point3<f32>;
/// A 3-dimensional point with [`f64`] elements.
pub type Point3d = Point3<f64>;
/// A 3-dimensional point with [`isize`] elements.
pub type Point3i = Point3<isize>;
/// A point in homogeneous coordinates.
pub type Point4<T> = Point<T, 4>;

/// An `N`-dimensional location with elements of type `T`.
///
/// Unlike [`Vector`], a point supports only the affine operations:
///
/// - `point - point` yields the [`Vector`] between them,
/// - `point + vector` yields the point offset by that vector,
/// - `-point` yields the [`Vector`] from the point to the origin.
///
/// Adding or scaling points is a type error.
///
/// ```
/// # use hinae_linalg::*;
/// let p = point3(1, 2, 3);
/// let q = point3(4, 6, 3);
/// assert_eq!(q - p, vec3(3, 4, 0));
/// assert_eq!(p + vec3(3, 4, 0), q);
/// assert_eq!(-p, vec3(-1, -2, -3));
/// ```
///
/// ```compile_fail
/// # use hinae_linalg::*;
/// let _ = point3(1, 2, 3) + point3(4, 5, 6);
/// ```
///
/// Elements are accessed the same way as for [`Vector`]: as fields `x`, `y`, `z`, by `usize` or
/// [`Axis`] index, or through [`Point::get`].
///
/// [`Axis`]: crate::Axis
/// [`Vector`]: crate::Vector
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T, const N: usize>(pub(crate) [T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Point<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Point<T, N> {}

impl<T: Zero, const N: usize> Point<T, N> {
    /// The origin of the coordinate system.
    pub const ORIGIN: Self = Self([T::ZERO; N]);
}

impl<T, const N: usize> Point<T, N> {
    /// Creates a point with every coordinate set to `elem`.
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a point by invoking a closure with the index of each coordinate.
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each coordinate, returning a new point.
    pub fn map<F, U>(self, f: F) -> Point<U, N>
    where
        F: FnMut(T) -> U,
    {
        Point(self.0.map(f))
    }

    /// Converts each coordinate to the numeric type `U`, with `as` semantics.
    pub fn cast<U>(self) -> Point<U, N>
    where
        U: CastFrom<T>,
    {
        self.map(U::cast_from)
    }

    /// Returns a reference to the coordinate at `index`, or [`None`] if it is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the coordinate at `index`, or [`None`] if it is out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    #[track_caller]
    #[inline]
    pub(crate) fn elem(&self, index: usize) -> &T {
        check_index(index, N);
        &self.0[index]
    }

    #[track_caller]
    #[inline]
    pub(crate) fn elem_mut(&mut self, index: usize) -> &mut T {
        check_index(index, N);
        &mut self.0[index]
    }
}

impl<T> Point<T, 2> {
    /// Creates a point from its two coordinates.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    /// Appends a Z coordinate, yielding a 3-dimensional point.
    pub fn extend(self, z: T) -> Point<T, 3> {
        let [x, y] = self.0;
        Point([x, y, z])
    }
}

impl<T> Point<T, 3> {
    /// Creates a point from its three coordinates.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    /// Projects the point onto the XY plane.
    pub fn truncate(self) -> Point<T, 2> {
        let [x, y, _] = self.0;
        Point([x, y])
    }

    /// Appends a homogeneous W coordinate.
    pub fn extend(self, w: T) -> Point<T, 4> {
        let [x, y, z] = self.0;
        Point([x, y, z, w])
    }
}

impl<T> Point<T, 4> {
    /// Creates a point from its four homogeneous coordinates.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    /// Drops the homogeneous W coordinate without dividing by it.
    pub fn truncate(self) -> Point<T, 3> {
        let [x, y, z, _] = self.0;
        Point([x, y, z])
    }
}

/// Returns the squared distance between `a` and `b`.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// assert_eq!(distance2(point2(1, 1), point2(4, 5)), 25);
/// ```
pub fn distance2<T: Number, const N: usize>(a: Point<T, N>, b: Point<T, N>) -> T {
    (a - b).norm2()
}

/// Returns the distance between `a` and `b`.
///
/// For integer element types the result is truncated.
pub fn distance<T: Number + Sqrt, const N: usize>(a: Point<T, N>, b: Point<T, N>) -> T {
    (a - b).norm()
}

impl<T, const N: usize> Default for Point<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Point<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Point<T, N>> for [T; N] {
    #[inline]
    fn from(value: Point<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Point<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats the point as `(x, y, z)`.
impl<T, const N: usize> fmt::Display for Point<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::display::tuple(f, &self.0)
    }
}

/// Constructs a [`Point2`] from its two coordinates.
#[inline]
pub const fn point2<T>(x: T, y: T) -> Point2<T> {
    Point([x, y])
}

/// Constructs a [`Point3`] from its three coordinates.
#[inline]
pub const fn point3<T>(x: T, y: T, z: T) -> Point3<T> {
    Point([x, y, z])
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{vec2, vec3, Axis, Vector};

    #[test]
    fn affine_ops() {
        let p = point3(1.0, 2.0, 3.0);
        let q = point3(4.0, 6.0, 3.0);
        assert_eq!(q - p, vec3(3.0, 4.0, 0.0));
        assert_eq!(p - p, Vector::ZERO);
        assert_eq!(p + (q - p), q);
        assert_eq!(-point2(1, -2), vec2(-1, 2));

        let mut r = point2(0, 0);
        r += vec2(2, 3);
        assert_eq!(r, point2(2, 3));
    }

    #[test]
    fn distances() {
        let p = point3(1.0, 2.0, 3.0);
        let q = point3(4.0, 6.0, 3.0);
        assert_eq!(distance2(p, q), (p - q).norm2());
        assert_relative_eq!(distance(p, q), 5.0);
        assert_eq!(distance(point2(0, 0), point2(2, 2)), 2);
    }

    #[test]
    fn access() {
        let mut p = point3(7, 8, 9);
        assert_eq!(p.x, 7);
        assert_eq!(p[Axis::Z], 9);
        p.y = 0;
        p[2] = 1;
        assert_eq!(p, point3(7, 0, 1));
        assert_eq!(p.get(3), None);
        assert_eq!(p.truncate(), point2(7, 0));
        assert_eq!(p.extend(1).w, 1);
    }

    #[test]
    #[should_panic(expected = "index out of range: the len is 2 but the index is 2")]
    fn index_out_of_range() {
        let p = point2(1, 2);
        let _ = p[2];
    }

    #[test]
    fn fmt() {
        assert_eq!(point3(1, 2, 3).to_string(), "(1, 2, 3)");
        assert_eq!(format!("{}", point2(0.5f32, 2.0)), "(0.5, 2)");
        assert_eq!(format!("{:?}", point2(0.5f32, 2.0)), "(0.5, 2.0)");
    }

    #[test]
    fn conversions() {
        assert_eq!(point3(1.7f32, -1.2, 0.0).cast::<i32>(), point3(1, -1, 0));
        assert_eq!(Point3::<u8>::ORIGIN, point3(0, 0, 0));
        assert_eq!(Point2::splat(5), point2(5, 5));
    }
}
