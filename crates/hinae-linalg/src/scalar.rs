//! Numeric traits implemented by the element types of every geometric type in this crate.
//!
//! All built-in integer and floating-point types implement the traits that make sense for them.
//! Generic code names the capabilities it needs ([`Number`] for plain arithmetic, [`Signed`] when
//! negation is involved, [`Float`] for transcendental functions) instead of a concrete type.

use std::ops;

use crate::MathError;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations and comparisons.
///
/// This is implemented for every built-in integer and floating-point type, signed or not.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialOrd
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialOrd
        + Copy
{
}

/// A [`Number`] that can be negated.
pub trait Signed: Number + ops::Neg<Output = Self> {}
impl<T> Signed for T where T: Number + ops::Neg<Output = Self> {}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of [`f32::min`] and [`f32::max`] (and their
/// [`f64`] counterparts), so a NaN operand loses against any number. Built-in integer types
/// implement it in terms of [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that support computing their square root.
///
/// Integer types compute the root in [`f64`] and truncate the result.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have an absolute value.
///
/// This is the identity function for unsigned integers.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Rounding towards negative and positive infinity.
///
/// Both operations are the identity function for integers.
pub trait Round {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
}

/// Raising a value to a power of the same type.
///
/// Integer types compute the power in [`f64`] and truncate the result.
pub trait Pow {
    fn pow(self, exp: Self) -> Self;
}

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    /// Computes the sine and the cosine of the angle `self` (in radians).
    fn sin_cos(self) -> (Self, Self);
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Mathematical constants used by rendering code.
pub trait FloatConst {
    const PI: Self;
    /// `1 / PI`
    const INV_PI: Self;
    /// `1 / (2 * PI)`
    const INV_2PI: Self;
    /// `1 / (4 * PI)`
    const INV_4PI: Self;
    const PI_OVER_2: Self;
    const PI_OVER_4: Self;
    const SQRT_2: Self;
    const INFINITY: Self;
}

/// Numeric types with a largest and smallest representable value.
pub trait Bounded {
    const MAX_NUMBER: Self;
    /// The most negative value (for floats, this is `-MAX_NUMBER`).
    const MIN_NUMBER: Self;
}

/// Explicit, possibly lossy conversion from another primitive numeric type.
///
/// This has the semantics of an `as` cast: floats are truncated towards zero and saturated when
/// converted to integers, integers wrap when narrowed.
pub trait CastFrom<T> {
    fn cast_from(value: T) -> Self;
}

/// The floating-point element types ([`f32`] and [`f64`]).
pub trait Float:
    Signed + MinMax + Sqrt + Abs + Round + Pow + Trig + FloatConst + Bounded + CastFrom<f64>
{
}
impl<T> Float for T where
    T: Signed + MinMax + Sqrt + Abs + Round + Pow + Trig + FloatConst + Bounded + CastFrom<f64>
{
}

macro_rules! impl_int {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as $types
                }
            }

            impl Round for $types {
                #[inline]
                fn floor(self) -> Self {
                    self
                }

                #[inline]
                fn ceil(self) -> Self {
                    self
                }
            }

            impl Pow for $types {
                fn pow(self, exp: Self) -> Self {
                    (self as f64).powf(exp as f64) as $types
                }
            }

            impl Bounded for $types {
                const MAX_NUMBER: Self = <$types>::MAX;
                const MIN_NUMBER: Self = <$types>::MIN;
            }
        )+
    };
}
impl_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_abs_signed {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    if self >= 0 { self } else { -self }
                }
            }
        )+
    };
}
impl_abs_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_abs_unsigned {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                #[inline]
                fn abs(self) -> Self {
                    self
                }
            }
        )+
    };
}
impl_abs_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_float {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl Round for $types {
                fn floor(self) -> Self {
                    self.floor()
                }

                fn ceil(self) -> Self {
                    self.ceil()
                }
            }

            impl Pow for $types {
                fn pow(self, exp: Self) -> Self {
                    self.powf(exp)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }

            impl FloatConst for $types {
                const PI: Self = std::$types::consts::PI;
                const INV_PI: Self = std::$types::consts::FRAC_1_PI;
                const INV_2PI: Self = 0.5 * std::$types::consts::FRAC_1_PI;
                const INV_4PI: Self = 0.25 * std::$types::consts::FRAC_1_PI;
                const PI_OVER_2: Self = std::$types::consts::FRAC_PI_2;
                const PI_OVER_4: Self = std::$types::consts::FRAC_PI_4;
                const SQRT_2: Self = std::$types::consts::SQRT_2;
                const INFINITY: Self = <$types>::INFINITY;
            }

            impl Bounded for $types {
                const MAX_NUMBER: Self = <$types>::MAX;
                const MIN_NUMBER: Self = <$types>::MIN;
            }
        )+
    };
}
impl_float!(f32, f64);

macro_rules! impl_cast_from {
    ($($from:ty),+) => {
        $(
            impl_cast_from!(@to $from; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
        )+
    };
    (@to $from:ty; $($to:ty),+) => {
        $(
            impl CastFrom<$from> for $to {
                #[inline]
                fn cast_from(value: $from) -> Self {
                    value as $to
                }
            }
        )+
    };
}
impl_cast_from!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Returns whether `x` equals [`Zero::ZERO`].
#[inline]
pub fn is_zero<T: Zero + PartialEq>(x: T) -> bool {
    x == T::ZERO
}

/// Returns whether `x` equals [`One::ONE`].
#[inline]
pub fn is_one<T: One + PartialEq>(x: T) -> bool {
    x == T::ONE
}

/// Returns whether the integer `x` is even.
pub fn is_even<T>(x: T) -> bool
where
    T: Number + ops::Rem<Output = T>,
{
    x % (T::ONE + T::ONE) == T::ZERO
}

/// Returns whether the integer `x` is odd.
pub fn is_odd<T>(x: T) -> bool
where
    T: Number + ops::Rem<Output = T>,
{
    !is_even(x)
}

/// Returns `1`, `-1` or `0` depending on the sign of `x`.
pub fn sign<T: Signed>(x: T) -> T {
    if x > T::ZERO {
        T::ONE
    } else if x < T::ZERO {
        -T::ONE
    } else {
        T::ZERO
    }
}

/// Restricts `value` to the closed range `[low, high]`.
///
/// Unlike [`MinMax::clamp`], this only needs a partial order, and returns the bound itself as soon
/// as `value` reaches it.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::scalar::clamp;
/// assert_eq!(clamp(0, -4, 10), 0);
/// assert_eq!(clamp(0, 4, 10), 4);
/// assert_eq!(clamp(0.0, 12.5, 10.0), 10.0);
/// ```
pub fn clamp<T: PartialOrd>(low: T, value: T, high: T) -> T {
    if value <= low {
        low
    } else if value >= high {
        high
    } else {
        value
    }
}

/// Computes `1 / x`, or returns [`MathError::DivisionByZero`] if `x` is zero.
pub fn checked_reciprocal<T: Number>(x: T) -> Result<T, MathError> {
    if is_zero(x) {
        return Err(MathError::DivisionByZero);
    }
    Ok(T::ONE / x)
}

/// Computes `1 / x`.
///
/// Integer arguments other than `1` and `-1` truncate to zero.
///
/// # Panics
///
/// Panics with [`MathError::DivisionByZero`] if `x` is zero.
#[track_caller]
pub fn reciprocal<T: Number>(x: T) -> T {
    match checked_reciprocal(x) {
        Ok(r) => r,
        Err(e) => e.raise(),
    }
}

/// Converts an angle from radians to degrees.
pub fn to_degrees<T: Float>(radians: T) -> T {
    (T::cast_from(180.0) / T::PI) * radians
}

/// Converts an angle from degrees to radians.
pub fn to_radians<T: Float>(degrees: T) -> T {
    (T::PI / T::cast_from(180.0)) * degrees
}

/// Computes `x⁴` with two multiplications.
#[inline]
pub fn pow4<T: Number>(x: T) -> T {
    let x2 = x * x;
    x2 * x2
}

/// Computes `x⁵` with three multiplications.
#[inline]
pub fn pow5<T: Number>(x: T) -> T {
    let x2 = x * x;
    x2 * x2 * x
}

/// Returns the largest of three values.
pub fn max3<T: MinMax>(x: T, y: T, z: T) -> T {
    x.max(y.max(z))
}

/// Returns the smallest of three values.
pub fn min3<T: MinMax>(x: T, y: T, z: T) -> T {
    x.min(y.min(z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity() {
        assert!(is_even(0));
        assert!(is_even(-4i64));
        assert!(is_odd(7u8));
        assert!(is_odd(-3));
    }

    #[test]
    fn signs() {
        assert_eq!(sign(-2.5), -1.0);
        assert_eq!(sign(0), 0);
        assert_eq!(sign(9i8), 1);
        assert_eq!(Abs::abs(-3i32), 3);
        assert_eq!(Abs::abs(3u32), 3);
    }

    #[test]
    fn clamping() {
        assert_eq!(clamp(1, 1, 5), 1);
        assert_eq!(clamp(1, 5, 5), 5);
        assert_eq!(clamp(1, 3, 5), 3);
        assert_eq!(MinMax::clamp(7, 1, 5), 5);
    }

    #[test]
    fn reciprocals() {
        assert_eq!(reciprocal(4.0), 0.25);
        assert_eq!(reciprocal(1), 1);
        assert_eq!(checked_reciprocal(0.0f32), Err(MathError::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn reciprocal_of_zero() {
        reciprocal(0);
    }

    #[test]
    fn integer_roots_truncate() {
        assert_eq!(Sqrt::sqrt(84i32), 9);
        assert_eq!(Sqrt::sqrt(16u64), 4);
        assert_eq!(Pow::pow(3i32, 2), 9);
    }

    #[test]
    fn powers() {
        assert_eq!(pow4(3), 81);
        assert_eq!(pow5(2.0), 32.0);
        assert_eq!(max3(1, 9, 4), 9);
        assert_eq!(min3(1.5, -9.0, 4.0), -9.0);
    }

    #[test]
    fn angles() {
        assert!((to_degrees(f64::PI) - 180.0).abs() < 1e-12);
        assert!((to_radians(90.0f32) - f32::PI_OVER_2).abs() < 1e-6);
        assert!((f64::INV_4PI * 4.0 - f64::INV_PI).abs() < 1e-15);
    }

    #[test]
    fn casts() {
        assert_eq!(i32::cast_from(2.9f32), 2);
        assert_eq!(f64::cast_from(7u8), 7.0);
        assert_eq!(u8::cast_from(-1.0f64), 0);
    }
}
