//! Coordinate frames and spherical coordinates.
//!
//! Spherical coordinates are stored in a [`Point3`] as `(r, theta, phi)`, where `theta` is the
//! polar angle measured from the +Z axis and `phi` is the azimuth in the XY plane, measured from
//! the +X axis. Both angles are in radians.

use hinae_linalg::{cross, point3, vec3, Float, Point3, Vector3};

use crate::{
    rng::{LinearCongruentialGenerator, Sample},
    trig::cos_to_sin,
};

/// Builds an orthonormal basis around the unit vector `v`.
///
/// Returns two unit vectors that are orthogonal to `v` and to each other. Together with `v`, they
/// form a right-handed coordinate system `(v, a, b)`.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// # use hinae_utils::coordinate::local_coordinate_system;
/// let (a, b) = local_coordinate_system(Vector3d::Z);
/// assert_eq!(dot(a, Vector3d::Z), 0.0);
/// assert_eq!(dot(b, Vector3d::Z), 0.0);
/// assert_eq!(dot(a, b), 0.0);
/// ```
pub fn local_coordinate_system<T: Float>(v: Vector3<T>) -> (Vector3<T>, Vector3<T>) {
    let [x, y, z] = v.into_array();
    // pick the larger of the two candidates to stay away from a zero-length vector
    let a = if x.abs() > y.abs() {
        vec3(-z, T::ZERO, x) / (x * x + z * z).sqrt()
    } else {
        vec3(T::ZERO, z, -y) / (y * y + z * z).sqrt()
    };
    (a, cross(v, a))
}

/// Converts a cartesian point to spherical coordinates `(r, theta, phi)`.
///
/// The origin maps to `(0, 0, 0)`.
pub fn cartesian_to_spherical<T: Float>(p: Point3<T>) -> Point3<T> {
    let [x, y, z] = p.into_array();
    let r = (x * x + y * y + z * z).sqrt();
    if r == T::ZERO {
        return Point3::ORIGIN;
    }
    let theta = (z / r).clamp(-T::ONE, T::ONE).acos();
    let phi = y.atan2(x);
    point3(r, theta, phi)
}

/// Converts spherical coordinates `(r, theta, phi)` to a cartesian point.
pub fn spherical_to_cartesian<T: Float>(p: Point3<T>) -> Point3<T> {
    let [r, theta, phi] = p.into_array();
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    point3(
        r * sin_theta * cos_phi,
        r * sin_theta * sin_phi,
        r * cos_theta,
    )
}

/// Draws a direction uniformly distributed over the unit sphere.
///
/// Consumes two values from `rng`.
pub fn uniform_on_sphere<T, const A: u64, const C: u64, const M: u64>(
    rng: &mut LinearCongruentialGenerator<T, A, C, M>,
) -> Vector3<T>
where
    T: Float + Sample,
{
    let two = T::ONE + T::ONE;
    let z = T::ONE - two * rng.get();
    let r = cos_to_sin(z);
    let phi = two * T::PI * rng.get();
    let (sin_phi, cos_phi) = phi.sin_cos();
    vec3(r * cos_phi, r * sin_phi, z)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;
    use hinae_linalg::{dot, Point3d, Vector3d};

    use super::*;
    use crate::rng::Lcg;

    #[test]
    fn local_frame_is_orthonormal() {
        let mut rng = fastrand::Rng::with_seed(0xf7a3e);
        for _ in 0..100 {
            let v = vec3(rng.f64() - 0.5, rng.f64() - 0.5, rng.f64() - 0.5).normalized();
            let (a, b) = local_coordinate_system(v);

            assert_relative_eq!(a.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(b.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(dot(v, a), 0.0, epsilon = 1e-12);
            assert_relative_eq!(dot(v, b), 0.0, epsilon = 1e-12);
            assert_relative_eq!(dot(a, b), 0.0, epsilon = 1e-12);
            assert_relative_eq!(cross(v, a), b, epsilon = 1e-12);
        }

        let (a, b) = local_coordinate_system(Vector3d::X);
        assert_eq!(a, vec3(0.0, 0.0, 1.0));
        assert_eq!(b, vec3(0.0, -1.0, 0.0));
    }

    #[test]
    fn spherical_known_values() {
        assert_eq!(
            cartesian_to_spherical(point3(0.0, 0.0, 2.0)),
            point3(2.0, 0.0, 0.0)
        );
        assert_relative_eq!(
            cartesian_to_spherical(point3(0.0, 3.0, 0.0)),
            point3(3.0, FRAC_PI_2, FRAC_PI_2),
            epsilon = 1e-15
        );
        assert_relative_eq!(
            cartesian_to_spherical(point3(0.0, 0.0, -1.0)),
            point3(1.0, PI, 0.0),
            epsilon = 1e-15
        );
        assert_eq!(cartesian_to_spherical(Point3d::ORIGIN), Point3::ORIGIN);
        assert_relative_eq!(
            spherical_to_cartesian(point3(2.0, FRAC_PI_2, 0.0)),
            point3(2.0, 0.0, 0.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn spherical_roundtrip() {
        let mut rng = fastrand::Rng::with_seed(0x5be7e);
        for _ in 0..100 {
            let p = point3(rng.f64() * 4.0 - 2.0, rng.f64() * 4.0 - 2.0, rng.f64() * 4.0 - 2.0);
            let s = cartesian_to_spherical(p);
            assert!(s.x >= 0.0);
            assert!((0.0..=PI).contains(&s.y));
            assert!((-PI..=PI).contains(&s.z));
            assert_relative_eq!(spherical_to_cartesian(s), p, epsilon = 1e-12);
        }
    }

    #[test]
    fn sphere_samples() {
        let mut rng = Lcg::<f64>::new(1234);
        let mut sum = Vector3d::ZERO;
        let n = 10_000;
        for _ in 0..n {
            let d = uniform_on_sphere(&mut rng);
            assert_relative_eq!(d.norm(), 1.0, epsilon = 1e-9);
            sum += d;
        }
        let mean = sum / f64::from(n);
        assert!(mean.norm() < 0.05, "mean={mean}");
    }
}
