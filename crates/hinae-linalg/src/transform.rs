//! Builders for common transformation matrices.
//!
//! All matrices act on column vectors (`matrix * point`), so `a * b` applies `b` first. Rotations
//! are counter-clockwise when looking down the rotation axis towards the origin, and angles are
//! in radians.
//!
//! ```
//! # use hinae_linalg::*;
//! let m = transform::translate(vec3(1, 2, 3)) * transform::scale_uniform(2);
//! assert_eq!(m * point3(1, 1, 1), point3(3, 4, 5));
//! // directions are not translated
//! assert_eq!(m * vec3(1, 1, 1), vec3(2, 2, 2));
//! ```

use crate::{cross, dot, Axis, Float, Matrix4, Number, Point, Point3, Vector3};

/// Scales by `x`, `y` and `z` along the respective axes.
#[rustfmt::skip]
pub fn scale<T: Number>(x: T, y: T, z: T) -> Matrix4<T> {
    let (o, l) = (T::ZERO, T::ONE);
    Matrix4::new(
        x, o, o, o,
        o, y, o, o,
        o, o, z, o,
        o, o, o, l,
    )
}

/// Scales by `s` along every axis.
pub fn scale_uniform<T: Number>(s: T) -> Matrix4<T> {
    scale(s, s, s)
}

/// Moves points by `v`.
#[rustfmt::skip]
pub fn translate<T: Number>(v: Vector3<T>) -> Matrix4<T> {
    let (o, l) = (T::ZERO, T::ONE);
    let [x, y, z] = v.into_array();
    Matrix4::new(
        l, o, o, x,
        o, l, o, y,
        o, o, l, z,
        o, o, o, l,
    )
}

/// Rotates around the X axis.
#[rustfmt::skip]
pub fn rotate_x<T: Float>(radians: T) -> Matrix4<T> {
    let (o, l) = (T::ZERO, T::ONE);
    let (s, c) = radians.sin_cos();
    Matrix4::new(
        l, o,  o, o,
        o, c, -s, o,
        o, s,  c, o,
        o, o,  o, l,
    )
}

/// Rotates around the Y axis.
#[rustfmt::skip]
pub fn rotate_y<T: Float>(radians: T) -> Matrix4<T> {
    let (o, l) = (T::ZERO, T::ONE);
    let (s, c) = radians.sin_cos();
    Matrix4::new(
         c, o, s, o,
         o, l, o, o,
        -s, o, c, o,
         o, o, o, l,
    )
}

/// Rotates around the Z axis.
#[rustfmt::skip]
pub fn rotate_z<T: Float>(radians: T) -> Matrix4<T> {
    let (o, l) = (T::ZERO, T::ONE);
    let (s, c) = radians.sin_cos();
    Matrix4::new(
        c, -s, o, o,
        s,  c, o, o,
        o,  o, l, o,
        o,  o, o, l,
    )
}

/// Rotates around one of the coordinate axes.
pub fn rotate_axis<T: Float>(axis: Axis, radians: T) -> Matrix4<T> {
    match axis {
        Axis::X => rotate_x(radians),
        Axis::Y => rotate_y(radians),
        Axis::Z => rotate_z(radians),
    }
}

/// Rotates around an arbitrary `axis` through the origin.
///
/// The axis does not have to be normalized. A zero axis yields the identity matrix.
pub fn rotate<T: Float>(axis: Vector3<T>, radians: T) -> Matrix4<T> {
    let Ok(axis) = axis.checked_normalized() else {
        return Matrix4::IDENTITY;
    };
    let [x, y, z] = axis.into_array();
    let (o, l) = (T::ZERO, T::ONE);
    let (s, c) = radians.sin_cos();
    let t = l - c;

    #[rustfmt::skip]
    let m = Matrix4::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y, o,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x, o,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,     o,
        o,                 o,                 o,                 l,
    );
    m
}

/// Builds a right-handed view matrix for a camera at `eye` looking at `target`.
///
/// The camera looks down its negative Z axis, with `up` roughly pointing along its Y axis. `eye`
/// is mapped to the origin.
///
/// # Panics
///
/// Panics with [`MathError::DivisionByZero`] if `eye == target`, or if `up` is parallel to the
/// viewing direction.
///
/// [`MathError::DivisionByZero`]: crate::MathError::DivisionByZero
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// let view = transform::look_at(point3(0.0, 0.0, 5.0), Point3::ORIGIN, Vector3::Y);
/// assert_eq!(view * point3(0.0, 0.0, 5.0), Point3::ORIGIN);
/// assert_eq!(view * Point3::ORIGIN, point3(0.0, 0.0, -5.0));
/// ```
#[track_caller]
pub fn look_at<T: Float>(eye: Point3<T>, target: Point3<T>, up: Vector3<T>) -> Matrix4<T> {
    let front = (target - eye).normalized();
    let right = cross(front, up).normalized();
    let up = cross(right, front);
    let eye = eye - Point::ORIGIN;
    let (o, l) = (T::ZERO, T::ONE);

    #[rustfmt::skip]
    let m = Matrix4::new(
         right.x,  right.y,  right.z, -dot(right, eye),
         up.x,     up.y,     up.z,    -dot(up, eye),
        -front.x, -front.y, -front.z,  dot(front, eye),
         o,        o,        o,        l,
    );
    m
}

/// Builds an orthographic projection of a `width` by `height` box, centered on the Z axis and
/// extending from `-z_near` to `-z_far`, into the `[-1, 1]` cube.
///
/// # Panics
///
/// Panics unless `width > 0`, `height > 0` and `0 <= z_near < z_far`.
#[track_caller]
pub fn orthographic<T: Float>(width: T, height: T, z_near: T, z_far: T) -> Matrix4<T> {
    let (o, l) = (T::ZERO, T::ONE);
    assert!(
        width > o && height > o && z_near >= o && z_far > z_near,
        "invalid orthographic projection parameters"
    );
    let two = l + l;

    #[rustfmt::skip]
    let m = Matrix4::new(
        two / width, o,            o,                    o,
        o,           two / height, o,                    o,
        o,           o,            two / (z_near - z_far), (z_far + z_near) / (z_near - z_far),
        o,           o,            o,                    l,
    );
    m
}

/// Builds a perspective projection with vertical field of view `fov_y` (in radians).
///
/// Points between `-z_near` and `-z_far` on the Z axis are mapped to the `[-1, 1]` depth range
/// after the homogeneous divide.
///
/// # Panics
///
/// Panics unless `fov_y > 0`, `aspect > 0` and `0 <= z_near < z_far`.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// # use approx::assert_relative_eq;
/// let proj = transform::perspective(std::f64::consts::FRAC_PI_2, 1.0, 1.0, 10.0);
/// assert_relative_eq!(proj * point3(0.0, 0.0, -1.0), point3(0.0, 0.0, -1.0), epsilon = 1e-12);
/// assert_relative_eq!(proj * point3(0.0, 0.0, -10.0), point3(0.0, 0.0, 1.0), epsilon = 1e-12);
/// assert_relative_eq!(proj * point3(1.0, 1.0, -1.0), point3(1.0, 1.0, -1.0), epsilon = 1e-12);
/// ```
#[track_caller]
pub fn perspective<T: Float>(fov_y: T, aspect: T, z_near: T, z_far: T) -> Matrix4<T> {
    let (o, l) = (T::ZERO, T::ONE);
    assert!(
        fov_y > o && aspect > o && z_near >= o && z_far > z_near,
        "invalid perspective projection parameters"
    );
    let two = l + l;
    let cot = l / (fov_y / two).tan();

    #[rustfmt::skip]
    let m = Matrix4::new(
        cot / aspect, o,   o,                                   o,
        o,            cot, o,                                   o,
        o,            o,   (z_far + z_near) / (z_near - z_far), two * z_far * z_near / (z_near - z_far),
        o,            o,   -l,                                  o,
    );
    m
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::{point3, vec3, Matrix4d, Point3d, Vector3d};

    #[test]
    fn scale_and_translate() {
        assert_eq!(scale(2, 3, 4) * point3(1, 1, 1), point3(2, 3, 4));
        assert_eq!(scale_uniform(1.0), Matrix4d::IDENTITY);
        assert_eq!(translate(vec3(1, 2, 3)) * point3(1, 1, 1), point3(2, 3, 4));
        assert_eq!(translate(vec3(1, 2, 3)) * vec3(1, 1, 1), vec3(1, 1, 1));
        assert_eq!(
            translate(vec3(1.0, 2.0, 3.0)).inverse(),
            translate(vec3(-1.0, -2.0, -3.0))
        );
    }

    #[test]
    fn axis_rotations() {
        assert_relative_eq!(rotate_x(FRAC_PI_2) * Vector3d::Y, Vector3::Z, epsilon = 1e-15);
        assert_relative_eq!(rotate_y(FRAC_PI_2) * Vector3d::Z, Vector3::X, epsilon = 1e-15);
        assert_relative_eq!(rotate_z(FRAC_PI_2) * Vector3d::X, Vector3::Y, epsilon = 1e-15);
        for axis in Axis::ALL {
            assert_eq!(rotate_axis(axis, 0.0), Matrix4d::IDENTITY);
        }
        assert_eq!(rotate_axis(Axis::Y, 0.7), rotate_y(0.7));
    }

    #[test]
    fn rotation_inverse_is_transpose() {
        let m = rotate(vec3(1.0, -2.0, 0.5), 2.1);
        assert_relative_eq!(m.inverse(), m.transpose(), epsilon = 1e-12);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn arbitrary_axis_matches_axis_rotations() {
        let angle = 0.4 * PI;
        assert_relative_eq!(rotate(Vector3d::X, angle), rotate_x(angle), epsilon = 1e-15);
        assert_relative_eq!(rotate(vec3(0.0, 3.0, 0.0), angle), rotate_y(angle), epsilon = 1e-15);
        assert_relative_eq!(rotate(Vector3d::Z, angle), rotate_z(angle), epsilon = 1e-15);
        assert_eq!(rotate(Vector3d::ZERO, angle), Matrix4::IDENTITY);
    }

    #[test]
    fn look_at_basis() {
        let eye = point3(1.0, 2.0, 3.0);
        let target = point3(4.0, -1.0, 0.5);
        let view = look_at(eye, target, Vector3::Y);

        assert_relative_eq!(view * eye, Point3d::ORIGIN, epsilon = 1e-12);
        let distance = (target - eye).norm();
        assert_relative_eq!(view * target, point3(0.0, 0.0, -distance), epsilon = 1e-12);
        // the view matrix is a rigid transform
        assert_relative_eq!(view.determinant(), 1.0, epsilon = 1e-12);
        // world up stays in the upper half of the view
        assert!((view * Vector3::Y).y > 0.0);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn look_at_up_parallel() {
        look_at(Point3d::ORIGIN, point3(0.0, 2.0, 0.0), Vector3::Y);
    }

    #[test]
    fn orthographic_maps_box_to_cube() {
        let proj = orthographic(4.0, 2.0, 1.0, 9.0);
        assert_eq!(proj * point3(-2.0, -1.0, -1.0), point3(-1.0, -1.0, -1.0));
        assert_eq!(proj * point3(2.0, 1.0, -9.0), point3(1.0, 1.0, 1.0));
        assert_eq!(proj * point3(0.0, 0.0, -5.0), point3(0.0, 0.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "invalid orthographic projection parameters")]
    fn orthographic_rejects_flipped_planes() {
        orthographic(1.0, 1.0, 2.0, 1.0);
    }

    #[test]
    fn perspective_depth_range() {
        let proj = perspective(FRAC_PI_2, 2.0, 0.5, 50.0);
        let near = proj * point3(0.0, 0.0, -0.5);
        let far = proj * point3(0.0, 0.0, -50.0);
        assert_relative_eq!(near, point3(0.0, 0.0, -1.0), epsilon = 1e-12);
        assert_relative_eq!(far, point3(0.0, 0.0, 1.0), epsilon = 1e-12);

        // the aspect ratio squeezes X
        let p = proj * point3(1.0, 0.5, -1.0);
        assert_relative_eq!(p.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.5, epsilon = 1e-12);
        assert!(p.z > near.z && p.z < far.z);
    }

    #[test]
    #[should_panic(expected = "invalid perspective projection parameters")]
    fn perspective_rejects_zero_fov() {
        perspective(0.0f32, 1.0, 0.1, 100.0);
    }
}
