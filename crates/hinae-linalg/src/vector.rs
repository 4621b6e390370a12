use std::{array, fmt};

use crate::{
    error::check_index, Abs, Axis, CastFrom, MathError, MinMax, Number, One, Sqrt, Zero,
};

mod ops;

/// A 2-dimensional vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vector2f = Vector2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vector2d = Vector2<f64>;
/// A 2-dimensional vector with [`isize`] elements.
pub type Vector2i = Vector2<isize>;
/// A 3-dimensional vector.
pub type Vector3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vector3f = Vector3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vector3d = Vector3<f64>;
/// A 3-dimensional vector with [`isize`] elements.
pub type Vector3i = Vector3<isize>;
/// A 4-dimensional (homogeneous) vector.
pub type Vector4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vector4f = Vector4<f32>;

/// An `N`-element vector storing elements of type `T`, representing a direction or displacement.
///
/// Locations are represented by [`Point`]s instead, which support a much smaller set of
/// operations.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions, or `Vector::new`, directly create
///   vectors from provided values.
/// - [`Vector::splat`] copies a single value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`Vector::cast`] converts the elements of an existing vector to another numeric type.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes, `Vector::X`, `Vector::Y` and `Vector::Z`
///   are unit vectors along the coordinate axes.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z` (and `w` for 4-dimensional vectors).
/// - The [`Index`] and [`IndexMut`] impls accept a `usize` or an [`Axis`]. Out of range indices
///   panic with [`MathError::IndexOutOfRange`]; [`Vector::get`] returns an [`Option`] instead.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented when the element type `T` also
///   implements them.
///
/// # Comparison
///
/// Equality and ordering are structural: vectors compare lexicographically, element by element.
///
/// [`Point`]: crate::Point
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Combines the elements of `self` and `other` pairwise using `f`.
    pub fn zip_with<U, R, F>(self, other: Vector<U, N>, mut f: F) -> Vector<R, N>
    where
        F: FnMut(T, U) -> R,
    {
        let mut other = other.0.into_iter();
        let mut this = self.0.into_iter();
        Vector::from_fn(|_| match (this.next(), other.next()) {
            (Some(a), Some(b)) => f(a, b),
            _ => unreachable!("both arrays have `N` elements"),
        })
    }

    /// Converts each element to the numeric type `U`, with `as` semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// let v = vec3(1.9, -2.5, 3.0).cast::<i32>();
    /// assert_eq!(v, vec3(1, -2, 3));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        U: CastFrom<T>,
    {
        self.map(U::cast_from)
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared length of this vector (the sum of its squared elements).
    ///
    /// This is exact for integer element types.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// assert_eq!(vec3(2, 4, 8).norm2(), 84);
    /// ```
    pub fn norm2(&self) -> T
    where
        T: Number,
    {
        dot(*self, *self)
    }

    /// Returns the length of this vector.
    ///
    /// For integer element types the square root is computed in floating point and truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// assert_eq!(vec3(2, 4, 8).norm(), 9);
    /// assert_eq!(vec2(3.0, 4.0).norm(), 5.0);
    /// ```
    pub fn norm(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.norm2().sqrt()
    }

    /// Divides this vector by its length in place, making it a unit vector.
    ///
    /// # Panics
    ///
    /// Panics with [`MathError::DivisionByZero`] if the vector has zero length.
    #[track_caller]
    pub fn normalize(&mut self)
    where
        T: Number + Sqrt,
    {
        *self = self.normalized();
    }

    /// Returns a unit vector pointing in the same direction as `self`.
    ///
    /// # Panics
    ///
    /// Panics with [`MathError::DivisionByZero`] if the vector has zero length. Use
    /// [`Vector::checked_normalized`] to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalized();
    /// assert_eq!(z, Vector3f::Z);
    /// ```
    #[track_caller]
    pub fn normalized(self) -> Self
    where
        T: Number + Sqrt,
    {
        match self.checked_normalized() {
            Ok(v) => v,
            Err(e) => e.raise(),
        }
    }

    /// Returns a unit vector pointing in the same direction as `self`, or
    /// [`MathError::DivisionByZero`] if `self` has zero length.
    pub fn checked_normalized(self) -> Result<Self, MathError>
    where
        T: Number + Sqrt,
    {
        let norm = self.norm();
        if norm == T::ZERO {
            return Err(MathError::DivisionByZero);
        }
        Ok(self.map(|elem| elem / norm))
    }

    /// Returns a vector containing the absolute value of each element.
    pub fn abs(self) -> Self
    where
        T: Abs,
    {
        self.map(T::abs)
    }

    /// Returns the largest element.
    pub fn max_component(self) -> T
    where
        T: MinMax + Copy,
    {
        self.0.into_iter().fold(self.0[0], MinMax::max)
    }

    /// Returns the smallest element.
    pub fn min_component(self) -> T
    where
        T: MinMax + Copy,
    {
        self.0.into_iter().fold(self.0[0], MinMax::min)
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

impl<T> Vector<T, 2> {
    /// Creates a vector from its two elements.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    /// Appends a Z element, yielding a 3-dimensional vector.
    pub fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, z])
    }

    /// Returns the axis of the largest element.
    ///
    /// Ties resolve towards [`Axis::Y`].
    pub fn max_dimension(&self) -> Axis
    where
        T: PartialOrd,
    {
        let [x, y] = &self.0;
        if x > y {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// Returns the axis of the smallest element.
    ///
    /// Ties resolve towards [`Axis::Y`].
    pub fn min_dimension(&self) -> Axis
    where
        T: PartialOrd,
    {
        let [x, y] = &self.0;
        if x < y {
            Axis::X
        } else {
            Axis::Y
        }
    }
}

impl<T> Vector<T, 3> {
    /// Creates a vector from its three elements.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    /// Removes the Z element, yielding a 2-dimensional vector.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Appends a W element, yielding a 4-dimensional vector.
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, w])
    }

    /// Returns the axis of the largest element.
    ///
    /// X and Y are compared first; the winner is then compared against Z, which wins ties.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_linalg::*;
    /// assert_eq!(vec3(3, 1, 2).max_dimension(), Axis::X);
    /// assert_eq!(vec3(3, 1, 3).max_dimension(), Axis::Z);
    /// assert_eq!(vec3(1, 1, 0).max_dimension(), Axis::Y);
    /// ```
    pub fn max_dimension(&self) -> Axis
    where
        T: PartialOrd,
    {
        let [x, y, z] = &self.0;
        if x > y {
            if x > z {
                Axis::X
            } else {
                Axis::Z
            }
        } else if y > z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Returns the axis of the smallest element.
    ///
    /// X and Y are compared first; the winner is then compared against Z, which wins ties.
    pub fn min_dimension(&self) -> Axis
    where
        T: PartialOrd,
    {
        let [x, y, z] = &self.0;
        if x < y {
            if x < z {
                Axis::X
            } else {
                Axis::Z
            }
        } else if y < z {
            Axis::Y
        } else {
            Axis::Z
        }
    }
}

impl<T> Vector<T, 4> {
    /// Creates a vector from its four elements.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    /// Removes the W element, yielding a 3-dimensional vector.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

/// Computes the dot product of `a` and `b`.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// assert_eq!(dot(vec3(1, 3, -5), vec3(4, -2, -1)), 3);
/// ```
pub fn dot<T: Number, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.0.into_iter()
        .zip(b.0)
        .fold(T::ZERO, |acc, (a, b)| acc + a * b)
}

/// Vectors that have a cross product.
///
/// The cross product of two 3-dimensional vectors is a vector perpendicular to both. For
/// 2-dimensional vectors it is the Z element of the cross product of both vectors extended with
/// Z=0 (the "perpendicular dot product"), a scalar whose sign tells the orientation of the pair.
pub trait Cross {
    type Output;

    fn cross(self, rhs: Self) -> Self::Output;
}

impl<T: Number> Cross for Vector<T, 2> {
    type Output = T;

    fn cross(self, rhs: Self) -> T {
        let [a1, a2] = self.0;
        let [b1, b2] = rhs.0;
        a1 * b2 - a2 * b1
    }
}

impl<T: Number> Cross for Vector<T, 3> {
    type Output = Self;

    fn cross(self, rhs: Self) -> Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = rhs.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

/// Computes the cross product of `a` and `b`.
///
/// Swapping the arguments negates the result.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// assert_eq!(cross(vec3(0, 1, 2), vec3(2, 4, 8)), vec3(0, 4, -2));
/// assert_eq!(cross(Vector3f::X, Vector3f::Y), Vector3f::Z);
/// assert_eq!(cross(vec2(1, 0), vec2(0, 1)), 1);
/// ```
#[inline]
pub fn cross<V: Cross>(a: V, b: V) -> V::Output {
    a.cross(b)
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
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

/// Formats the vector as `(x, y, z)`.
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::display::tuple(f, &self.0)
    }
}

/// Constructs a [`Vector2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vector2<T> {
    Vector([x, y])
}

/// Constructs a [`Vector3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vector4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector4<T> {
    Vector([x, y, z, w])
}
