use std::{fmt, ops::Index};

use crate::{error::check_index, max, min, Axis, MinMax, Number, Point, Point3, Vector3};

/// A box with [`f32`] corners.
pub type Bounds3f = Bounds3<f32>;
/// A box with [`f64`] corners.
pub type Bounds3d = Bounds3<f64>;
/// A box with [`isize`] corners.
pub type Bounds3i = Bounds3<isize>;

/// An axis-aligned bounding box, defined by its minimum and maximum corner.
///
/// Every constructor orders the corners component by component, so `p_min[i] <= p_max[i]` holds
/// on each axis. The only exception is [`Bounds3::intersect`] of two boxes that don't
/// [overlap](Bounds3::overlaps).
///
/// Indexing with `0` yields the minimum corner, `1` the maximum corner.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// let b = Bounds3::new(point3(0, 10, 0), point3(10, 0, 10));
/// assert_eq!(b.p_min(), point3(0, 0, 0));
/// assert_eq!(b[1], point3(10, 10, 10));
/// assert_eq!(b.centroid(), point3(5, 5, 5));
/// assert_eq!(b.surface_area(), 600);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bounds3<T> {
    corners: [Point3<T>; 2],
}

impl<T: Copy> Bounds3<T> {
    /// Creates a degenerate box that contains only `p`.
    #[inline]
    pub fn from_point(p: Point3<T>) -> Self {
        Self { corners: [p, p] }
    }

    /// Returns the minimum corner.
    #[inline]
    pub fn p_min(&self) -> Point3<T> {
        self.corners[0]
    }

    /// Returns the maximum corner.
    #[inline]
    pub fn p_max(&self) -> Point3<T> {
        self.corners[1]
    }
}

impl<T: MinMax + Copy> Bounds3<T> {
    /// Creates the smallest box that contains both `p1` and `p2`.
    ///
    /// The points may be any two opposing corners of the box.
    pub fn new(p1: Point3<T>, p2: Point3<T>) -> Self {
        Self {
            corners: [min(p1, p2), max(p1, p2)],
        }
    }

    /// Returns the smallest box that contains `self` and the point `p`.
    #[must_use]
    pub fn union_point(&self, p: Point3<T>) -> Self {
        Self {
            corners: [min(self.p_min(), p), max(self.p_max(), p)],
        }
    }

    /// Returns the smallest box that contains both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            corners: [min(self.p_min(), other.p_min()), max(self.p_max(), other.p_max())],
        }
    }

    /// Returns the region covered by both `self` and `other`.
    ///
    /// If the boxes don't [overlap](Self::overlaps), the result is ill-formed: its minimum corner
    /// is greater than its maximum corner on at least one axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// let a = Bounds3::new(point3(0, 0, 0), point3(4, 4, 4));
    /// let b = Bounds3::new(point3(2, -2, 3), point3(6, 2, 8));
    /// assert_eq!(a.intersect(&b), Bounds3::new(point3(2, 0, 3), point3(4, 2, 4)));
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            corners: [max(self.p_min(), other.p_min()), min(self.p_max(), other.p_max())],
        }
    }
}

impl<T: PartialOrd + Copy> Bounds3<T> {
    /// Returns `true` if `p` lies inside the box or on its boundary.
    pub fn inside(&self, p: Point3<T>) -> bool {
        let (lo, hi) = (self.p_min(), self.p_max());
        (0..3).all(|i| p[i] >= lo[i] && p[i] <= hi[i])
    }

    /// Returns `true` if the two boxes share at least one point (touching faces count).
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..3).all(|i| self.p_max()[i] >= other.p_min()[i] && self.p_min()[i] <= other.p_max()[i])
    }
}

impl<T: Number> Bounds3<T> {
    /// Returns the vector from the minimum to the maximum corner.
    pub fn diagonal(&self) -> Vector3<T> {
        self.p_max() - self.p_min()
    }

    /// Returns the axis along which the box is longest.
    ///
    /// Ties are broken the same way as in [`Vector3::max_dimension`].
    ///
    /// [`Vector3::max_dimension`]: crate::Vector::max_dimension
    pub fn max_extent(&self) -> Axis {
        self.diagonal().max_dimension()
    }

    /// Returns the center of the box.
    ///
    /// Each corner is halved before summing, so integer boxes don't overflow (but may truncate
    /// twice).
    pub fn centroid(&self) -> Point3<T> {
        let two = T::ONE + T::ONE;
        let (lo, hi) = (self.p_min(), self.p_max());
        Point::from_fn(|i| lo[i] / two + hi[i] / two)
    }

    /// Returns the total area of the six faces of the box.
    pub fn surface_area(&self) -> T {
        let two = T::ONE + T::ONE;
        let [x, y, z] = self.diagonal().into_array();
        two * (x * y + x * z + y * z)
    }
}

impl<T> Index<usize> for Bounds3<T> {
    type Output = Point3<T>;

    /// # Panics
    ///
    /// Panics with [`MathError::IndexOutOfRange`] if `index` is not 0 or 1.
    ///
    /// [`MathError::IndexOutOfRange`]: crate::MathError::IndexOutOfRange
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        check_index(index, 2);
        &self.corners[index]
    }
}

impl<T: Copy> From<Point3<T>> for Bounds3<T> {
    fn from(p: Point3<T>) -> Self {
        Self::from_point(p)
    }
}

impl<T: fmt::Debug> fmt::Debug for Bounds3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bounds3")
            .field("p_min", &self.corners[0])
            .field("p_max", &self.corners[1])
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Bounds3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.corners[0], self.corners[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{point3, vec3};

    #[test]
    fn corners_are_ordered() {
        let b = Bounds3::new(point3(3.0, -1.0, 2.0), point3(-3.0, 1.0, 0.0));
        assert_eq!(b.p_min(), point3(-3.0, -1.0, 0.0));
        assert_eq!(b.p_max(), point3(3.0, 1.0, 2.0));
        assert_eq!(b[0], b.p_min());
        assert_eq!(b[1], b.p_max());

        let p = point3(1, 2, 3);
        let degenerate = Bounds3::from_point(p);
        assert_eq!(degenerate, Bounds3::new(p, p));
        assert!(degenerate.inside(p));
        assert_eq!(degenerate.surface_area(), 0);
    }

    #[test]
    #[should_panic(expected = "index out of range: the len is 2 but the index is 2")]
    fn index_out_of_range() {
        let b = Bounds3i::from_point(point3(0, 0, 0));
        let _ = b[2];
    }

    #[test]
    fn measurements() {
        let b = Bounds3::new(point3(0, 0, 0), point3(10, 10, 10));
        assert_eq!(b.centroid(), point3(5, 5, 5));
        assert_eq!(b.surface_area(), 600);
        assert_eq!(b.diagonal(), vec3(10, 10, 10));
        assert_eq!(b.max_extent(), Axis::Z);

        let b = Bounds3::new(point3(0.0, 0.0, 0.0), point3(1.0, 2.0, 3.0));
        assert_eq!(b.centroid(), point3(0.5, 1.0, 1.5));
        assert_eq!(b.surface_area(), 22.0);
        assert_eq!(b.max_extent(), Axis::Z);
        assert_eq!(Bounds3::new(point3(0, 0, 0), point3(1, 5, 2)).max_extent(), Axis::Y);
    }

    #[test]
    fn integer_centroid_halves_each_corner() {
        // 1/2 + 3/2 == 0 + 1, whereas (1 + 3) / 2 == 2
        let b = Bounds3::new(point3(1, 1, 1), point3(3, 3, 3));
        assert_eq!(b.centroid(), point3(1, 1, 1));

        let b = Bounds3::new(point3(i32::MAX - 2, 0, 0), point3(i32::MAX, 0, 0));
        assert_eq!(b.centroid().x, i32::MAX / 2 + (i32::MAX - 2) / 2);
    }

    #[test]
    fn inside_is_inclusive() {
        let b = Bounds3::new(point3(0, 0, 0), point3(2, 2, 2));
        assert!(b.inside(point3(0, 0, 0)));
        assert!(b.inside(point3(2, 2, 2)));
        assert!(b.inside(point3(1, 2, 0)));
        assert!(!b.inside(point3(3, 1, 1)));
        assert!(!b.inside(point3(1, -1, 1)));
    }

    #[test]
    fn union() {
        let b = Bounds3::new(point3(0, 0, 0), point3(2, 2, 2));
        assert_eq!(b.union_point(point3(1, 1, 1)), b);
        assert_eq!(
            b.union_point(point3(-1, 5, 1)),
            Bounds3::new(point3(-1, 0, 0), point3(2, 5, 2))
        );

        let c = Bounds3::new(point3(5, 5, 5), point3(6, 6, 6));
        let u = b.union(&c);
        assert_eq!(u, Bounds3::new(point3(0, 0, 0), point3(6, 6, 6)));
        assert_eq!(u, c.union(&b));
        assert_eq!(b.union(&b), b);
    }

    #[test]
    fn overlap_and_intersection() {
        let a = Bounds3::new(point3(0, 0, 0), point3(2, 2, 2));
        let touching = Bounds3::new(point3(2, 0, 0), point3(3, 2, 2));
        let apart = Bounds3::new(point3(3, 3, 3), point3(4, 4, 4));

        assert!(a.overlaps(&touching));
        assert!(touching.overlaps(&a));
        assert_eq!(
            a.intersect(&touching),
            Bounds3::new(point3(2, 0, 0), point3(2, 2, 2))
        );

        assert!(!a.overlaps(&apart));
        let ill_formed = a.intersect(&apart);
        assert!(ill_formed.p_min().x > ill_formed.p_max().x);
    }

    #[test]
    fn fmt() {
        let b = Bounds3::new(point3(0, 0, 0), point3(1, 2, 3));
        assert_eq!(b.to_string(), "[(0, 0, 0) - (1, 2, 3)]");
        assert_eq!(
            format!("{:?}", b),
            "Bounds3 { p_min: (0, 0, 0), p_max: (1, 2, 3) }"
        );
    }
}
