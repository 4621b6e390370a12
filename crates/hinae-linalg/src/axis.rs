use std::fmt;

/// A coordinate axis.
///
/// Used as the result of queries like [`Vector::max_dimension`] and [`Bounds3::max_extent`], and
/// as an index into vectors and points.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// let v = vec3(4, 5, 6);
/// assert_eq!(v[Axis::Y], 5);
/// assert_eq!(Axis::Z.index(), 2);
/// ```
///
/// [`Vector::max_dimension`]: crate::Vector::max_dimension
/// [`Bounds3::max_extent`]: crate::Bounds3::max_extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// All axes, in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the component index this axis selects.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<Axis> for usize {
    #[inline]
    fn from(axis: Axis) -> Self {
        axis.index()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        })
    }
}
