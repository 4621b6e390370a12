//! Component-wise operations shared by every fixed-shape geometric type.
//!
//! Each free function in this module is written once against the [`Components`] trait and works
//! for [`Vector`]s and [`Point`]s of any dimension.

use crate::{Abs, CastFrom, MinMax, Number, One, Point, Pow, Round, Vector};

/// A geometric type made of a fixed number of scalar fields.
///
/// The number of fields is a compile-time constant, so shape requirements (like those of
/// [`cast`]) are checked during monomorphization instead of at runtime.
pub trait Components: Copy {
    /// The element type.
    type Scalar: Copy;

    /// The number of scalar fields.
    const FIELDS: usize;

    /// Returns the field at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`Self::FIELDS`].
    fn component(&self, index: usize) -> Self::Scalar;

    /// Builds a value by invoking `f` with the index of each field.
    fn from_components<F>(f: F) -> Self
    where
        F: FnMut(usize) -> Self::Scalar;

    /// Applies `f` to every field.
    fn map_components<F>(self, mut f: F) -> Self
    where
        F: FnMut(Self::Scalar) -> Self::Scalar,
    {
        Self::from_components(|i| f(self.component(i)))
    }
}

impl<T: Copy, const N: usize> Components for Vector<T, N> {
    type Scalar = T;
    const FIELDS: usize = N;

    #[inline]
    fn component(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn from_components<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Vector::from_fn(f)
    }
}

impl<T: Copy, const N: usize> Components for Point<T, N> {
    type Scalar = T;
    const FIELDS: usize = N;

    #[inline]
    fn component(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn from_components<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Point::from_fn(f)
    }
}

/// Component-wise minimum of `a` and `b`.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// assert_eq!(min(point3(1, 5, 3), point3(4, 2, 3)), point3(1, 2, 3));
/// ```
pub fn min<G>(a: G, b: G) -> G
where
    G: Components,
    G::Scalar: MinMax,
{
    G::from_components(|i| a.component(i).min(b.component(i)))
}

/// Component-wise maximum of `a` and `b`.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// assert_eq!(max(vec2(1.0, -5.0), vec2(0.0, 2.0)), vec2(1.0, 2.0));
/// ```
pub fn max<G>(a: G, b: G) -> G
where
    G: Components,
    G::Scalar: MinMax,
{
    G::from_components(|i| a.component(i).max(b.component(i)))
}

/// Restricts every component of `value` to the closed range `[low, high]`.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// assert_eq!(clamp(0, vec3(-3, 4, 12), 10), vec3(0, 4, 10));
/// ```
pub fn clamp<G>(low: G::Scalar, value: G, high: G::Scalar) -> G
where
    G: Components,
    G::Scalar: PartialOrd,
{
    value.map_components(|c| crate::scalar::clamp(low, c, high))
}

/// Component-wise absolute value.
pub fn abs<G>(value: G) -> G
where
    G: Components,
    G::Scalar: Abs,
{
    value.map_components(Abs::abs)
}

/// Rounds every component towards positive infinity.
pub fn ceil<G>(value: G) -> G
where
    G: Components,
    G::Scalar: Round,
{
    value.map_components(Round::ceil)
}

/// Rounds every component towards negative infinity.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// assert_eq!(floor(point2(1.5, -0.5)), point2(1.0, -1.0));
/// assert_eq!(ceil(point2(1.5, -0.5)), point2(2.0, -0.0));
/// ```
pub fn floor<G>(value: G) -> G
where
    G: Components,
    G::Scalar: Round,
{
    value.map_components(Round::floor)
}

/// Raises every component to the power `exp`.
pub fn pow<G>(value: G, exp: G::Scalar) -> G
where
    G: Components,
    G::Scalar: Pow,
{
    value.map_components(|c| c.pow(exp))
}

/// Linear interpolation between `left` (at `w = 0`) and `right` (at `w = 1`), per component.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// assert_eq!(lerp(point2(0.0, 10.0), point2(10.0, 20.0), 0.25), point2(2.5, 12.5));
/// ```
pub fn lerp<G>(left: G, right: G, w: G::Scalar) -> G
where
    G: Components,
    G::Scalar: Number,
{
    G::from_components(|i| {
        let l = left.component(i);
        l + (right.component(i) - l) * w
    })
}

/// Converts between geometric types, changing the element type and/or the shape.
///
/// The destination may have fewer fields than the source (trailing fields are dropped), or exactly
/// 4 fields when the source has 3, in which case the homogeneous W field is set to
/// [`One::ONE`]. Any other widening is rejected at compile time.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// let p = point3(1.5f32, 2.5, 3.5);
/// let v: Vector3<f32> = cast(p);
/// assert_eq!(v, vec3(1.5, 2.5, 3.5));
///
/// let flat: Point2<i32> = cast(p);
/// assert_eq!(flat, point2(1, 2));
///
/// let homogeneous: Point4<f64> = cast(p);
/// assert_eq!(homogeneous, Point4::new(1.5, 2.5, 3.5, 1.0));
/// ```
///
/// ```compile_fail
/// # use hinae_linalg::*;
/// let v: Vector3<f32> = cast(vec2(1.0f32, 2.0));
/// ```
pub fn cast<Dst, Src>(from: Src) -> Dst
where
    Dst: Components,
    Src: Components,
    Dst::Scalar: CastFrom<Src::Scalar> + One,
{
    const {
        assert!(
            Dst::FIELDS <= Src::FIELDS || (Dst::FIELDS == 4 && Src::FIELDS == 3),
            "cannot cast to a type with more fields than the source"
        );
    }
    Dst::from_components(|i| {
        if i < Src::FIELDS {
            <Dst::Scalar as CastFrom<Src::Scalar>>::cast_from(from.component(i))
        } else {
            <Dst::Scalar as One>::ONE
        }
    })
}
