//! Conversions between sines and cosines of the same angle.
//!
//! All functions work on `sin² + cos² = 1`. The squared variants clamp their result at zero, so
//! inputs slightly outside of `[-1, 1]` (from rounding errors) don't produce NaN.

use hinae_linalg::Float;

/// Computes `cos²` from `sin`.
#[inline]
pub fn sin_to_cos2<T: Float>(sin: T) -> T {
    (T::ONE - sin * sin).max(T::ZERO)
}

/// Computes `sin²` from `cos`.
#[inline]
pub fn cos_to_sin2<T: Float>(cos: T) -> T {
    (T::ONE - cos * cos).max(T::ZERO)
}

/// Computes `cos` from `sin²`.
#[inline]
pub fn sin2_to_cos<T: Float>(sin2: T) -> T {
    (T::ONE - sin2).sqrt()
}

/// Computes `sin` from `cos²`.
#[inline]
pub fn cos2_to_sin<T: Float>(cos2: T) -> T {
    (T::ONE - cos2).sqrt()
}

/// Computes the (non-negative) `cos` from `sin`.
#[inline]
pub fn sin_to_cos<T: Float>(sin: T) -> T {
    sin_to_cos2(sin).sqrt()
}

/// Computes the (non-negative) `sin` from `cos`.
#[inline]
pub fn cos_to_sin<T: Float>(cos: T) -> T {
    cos_to_sin2(cos).sqrt()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn pythagoras() {
        let mut rng = fastrand::Rng::with_seed(0x7219);
        for _ in 0..100 {
            let angle = rng.f64() * std::f64::consts::PI;
            let (sin, cos) = angle.sin_cos();

            assert_relative_eq!(sin_to_cos2(sin), cos * cos, epsilon = 1e-12);
            assert_relative_eq!(cos_to_sin2(cos), sin * sin, epsilon = 1e-12);
            assert_relative_eq!(sin_to_cos(sin), cos.abs(), epsilon = 1e-7);
            assert_relative_eq!(cos_to_sin(cos), sin, epsilon = 1e-7);
            assert_relative_eq!(sin2_to_cos(sin * sin), cos.abs(), epsilon = 1e-7);
            assert_relative_eq!(cos2_to_sin(cos * cos), sin, epsilon = 1e-7);
        }
    }

    #[test]
    fn clamped_at_zero() {
        assert_eq!(sin_to_cos2(1.0000001f32), 0.0);
        assert_eq!(cos_to_sin2(-1.5f64), 0.0);
        assert_eq!(sin_to_cos(1.0000001f32), 0.0);
        assert_eq!(cos_to_sin(1.0f64), 0.0);
        assert_eq!(cos_to_sin(0.0f64), 1.0);
    }
}
