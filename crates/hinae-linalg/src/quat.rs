use std::fmt;

use crate::{cross, dot, Float, MathError, Matrix4, One, Vector, Vector3, Zero};

mod ops;

/// A quaternion with [`f32`] elements.
pub type Quaternionf = Quaternion<f32>;
/// A quaternion with [`f64`] elements.
pub type Quaterniond = Quaternion<f64>;

/// A quaternion `w + xi + yj + zk`, stored as a vector part `v = (x, y, z)` and a scalar part `w`.
///
/// Unit quaternions represent rotations in 3D space. Multiplying two quaternions (the Hamilton
/// product) composes their rotations: `(a * b).rotate(v) == a.rotate(b.rotate(v))`.
///
/// All angles are in radians.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// # use approx::assert_relative_eq;
/// let q = Quaternion::from_rotation_z(std::f64::consts::FRAC_PI_2);
/// assert_relative_eq!(q.rotate(Vector3::X), Vector3::Y, epsilon = 1e-15);
/// assert_relative_eq!(q.to_matrix4() * Vector3::X, Vector3::Y, epsilon = 1e-15);
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Quaternion<T> {
    /// The vector (imaginary) part.
    pub v: Vector3<T>,
    /// The scalar (real) part.
    pub w: T,
}

impl<T: Zero + One> Quaternion<T> {
    /// The quaternion representing no rotation.
    pub const IDENTITY: Self = Self {
        v: Vector([T::ZERO, T::ZERO, T::ZERO]),
        w: T::ONE,
    };
}

impl<T> Quaternion<T> {
    #[inline]
    pub const fn new(v: Vector3<T>, w: T) -> Self {
        Self { v, w }
    }

    /// Creates a quaternion from its 4 components.
    #[inline]
    pub const fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            v: Vector([x, y, z]),
            w,
        }
    }
}

impl<T: Float> Quaternion<T> {
    /// Creates a unit quaternion that rotates by `radians` around `axis`.
    ///
    /// The axis does not have to be normalized. A zero axis yields [`Quaternion::IDENTITY`].
    pub fn from_axis_angle(axis: Vector3<T>, radians: T) -> Self {
        let Ok(axis) = axis.checked_normalized() else {
            return Self::IDENTITY;
        };
        let half = radians / (T::ONE + T::ONE);
        let (sin, cos) = half.sin_cos();
        Self::new(axis * sin, cos)
    }

    /// Creates a quaternion that rotates by `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self {
        Self::from_axis_angle(Vector3::X, radians)
    }

    /// Creates a quaternion that rotates by `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self {
        Self::from_axis_angle(Vector3::Y, radians)
    }

    /// Creates a quaternion that rotates by `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self {
        Self::from_axis_angle(Vector3::Z, radians)
    }

    /// Returns the conjugate `w - xi - yj - zk`.
    ///
    /// For unit quaternions this is the inverse rotation.
    pub fn conjugate(self) -> Self {
        Self::new(-self.v, self.w)
    }

    /// Returns the squared length (the sum of the squared components).
    pub fn length2(&self) -> T {
        dot(self.v, self.v) + self.w * self.w
    }

    /// Returns the length.
    pub fn length(&self) -> T {
        self.length2().sqrt()
    }

    /// Scales the quaternion to unit length.
    ///
    /// # Panics
    ///
    /// Panics with [`MathError::DivisionByZero`] if the quaternion has zero length.
    #[track_caller]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns the quaternion scaled to unit length.
    ///
    /// # Panics
    ///
    /// Panics with [`MathError::DivisionByZero`] if the quaternion has zero length.
    #[track_caller]
    pub fn normalized(self) -> Self {
        match self.checked_normalized() {
            Ok(q) => q,
            Err(e) => e.raise(),
        }
    }

    /// Returns the quaternion scaled to unit length, or [`MathError::DivisionByZero`] if it has zero
    /// length.
    pub fn checked_normalized(self) -> Result<Self, MathError> {
        let len = self.length();
        if len == T::ZERO {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::new(self.v / len, self.w / len))
    }

    /// Rotates `v` by this quaternion, which must have unit length.
    pub fn rotate(&self, v: Vector3<T>) -> Vector3<T> {
        let two = T::ONE + T::ONE;
        let t = cross(self.v, v) * two;
        v + t * self.w + cross(self.v, t)
    }

    /// Converts this unit quaternion to a rotation matrix.
    ///
    /// The result is the same as the one produced by the [`transform`](crate::transform) builders
    /// for the same rotation.
    pub fn to_matrix4(&self) -> Matrix4<T> {
        let (o, l, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);
        let [x, y, z] = self.v.into_array();
        let w = self.w;

        let (x2, y2, z2) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        #[rustfmt::skip]
        let m = Matrix4::new(
            l - two * (y2 + z2), two * (xy - wz),     two * (xz + wy),     o,
            two * (xy + wz),     l - two * (x2 + z2), two * (yz - wx),     o,
            two * (xz - wy),     two * (yz + wx),     l - two * (x2 + y2), o,
            o,                   o,                   o,                   l,
        );
        m
    }
}

impl<T: fmt::Debug> fmt::Debug for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quaternion")
            .field("v", &self.v)
            .field("w", &self.w)
            .finish()
    }
}

/// Formats the quaternion as `[w, (x, y, z)]`.
impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.w, self.v)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::{transform, vec3, Vector3d};

    #[test]
    fn identity() {
        let id = Quaterniond::IDENTITY;
        assert_eq!(id.length(), 1.0);
        assert_eq!(id.rotate(vec3(1.0, 2.0, 3.0)), vec3(1.0, 2.0, 3.0));
        assert_eq!(id.to_matrix4(), Matrix4::IDENTITY);
        assert_eq!(Quaterniond::from_axis_angle(Vector3::ZERO, 1.0), id);
        assert_eq!(id * id, id);
    }

    #[test]
    fn axis_rotations() {
        let x = Quaternion::from_rotation_x(FRAC_PI_2);
        let y = Quaternion::from_rotation_y(FRAC_PI_2);
        let z = Quaternion::from_rotation_z(FRAC_PI_2);

        assert_relative_eq!(x.rotate(Vector3d::Y), Vector3::Z, epsilon = 1e-15);
        assert_relative_eq!(y.rotate(Vector3d::Z), Vector3::X, epsilon = 1e-15);
        assert_relative_eq!(z.rotate(Vector3d::X), Vector3::Y, epsilon = 1e-15);

        let half_turn = Quaternion::from_axis_angle(vec3(0.0, 0.0, 5.0), PI);
        assert_relative_eq!(
            half_turn.rotate(vec3(1.0, 1.0, 1.0)),
            vec3(-1.0, -1.0, 1.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn matrix_agrees_with_transform() {
        let mut rng = fastrand::Rng::with_seed(0x9a7);
        for _ in 0..20 {
            let angle = rng.f64() * 2.0 * PI - PI;
            assert_relative_eq!(
                Quaternion::from_rotation_x(angle).to_matrix4(),
                transform::rotate_x(angle),
                epsilon = 1e-12
            );
            assert_relative_eq!(
                Quaternion::from_rotation_y(angle).to_matrix4(),
                transform::rotate_y(angle),
                epsilon = 1e-12
            );
            assert_relative_eq!(
                Quaternion::from_rotation_z(angle).to_matrix4(),
                transform::rotate_z(angle),
                epsilon = 1e-12
            );

            let axis = vec3(rng.f64() - 0.5, rng.f64() - 0.5, rng.f64() - 0.5);
            let q = Quaternion::from_axis_angle(axis, angle);
            let v = vec3(rng.f64(), rng.f64(), rng.f64());
            assert_relative_eq!(q.to_matrix4() * v, q.rotate(v), epsilon = 1e-12);
            assert_relative_eq!(transform::rotate(axis, angle) * v, q.rotate(v), epsilon = 1e-12);
        }
    }

    #[test]
    fn composition() {
        let a = Quaternion::from_rotation_x(0.3);
        let b = Quaternion::from_axis_angle(vec3(1.0, 2.0, -1.0), 1.2);
        let v = vec3(0.5, -1.0, 2.0);

        assert_relative_eq!((a * b).rotate(v), a.rotate(b.rotate(v)), epsilon = 1e-12);
        assert_relative_eq!((a * b).length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(a.conjugate().rotate(a.rotate(v)), v, epsilon = 1e-12);
        assert_relative_eq!(a * a.conjugate(), Quaternion::IDENTITY, epsilon = 1e-15);
    }

    #[test]
    fn normalization() {
        let mut q = Quaternion::from_components(0.0, 3.0, 0.0, 4.0);
        assert_eq!(q.length2(), 25.0);
        assert_eq!(q.length(), 5.0);
        q.normalize();
        assert_eq!(q, Quaternion::from_components(0.0, 0.6, 0.0, 0.8));
        assert_eq!(
            Quaterniond::from_components(0.0, 0.0, 0.0, 0.0).checked_normalized(),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn normalize_zero() {
        Quaternionf::from_components(0.0, 0.0, 0.0, 0.0).normalized();
    }

    #[test]
    fn ordering() {
        let a = Quaternion::from_components(0.0, 0.0, 0.0, 1.0);
        let b = Quaternion::from_components(0.0, 0.0, 1.0, 0.0);
        assert!(a < b);
        assert!(b > a);
        assert!(Quaternion::from_components(0.0, 0.0, 0.0, f64::NAN)
            .partial_cmp(&a)
            .is_none());
    }

    #[test]
    fn fmt() {
        let q = Quaternion::from_components(1, 2, 3, 4);
        assert_eq!(q.to_string(), "[4, (1, 2, 3)]");
    }
}
