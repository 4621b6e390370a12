//! Tolerance-based comparison through the [`approx`] traits.
//!
//! Compound types compare equal if all of their elements do.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix4, Point, Quaternion, Vector};

trait Elements {
    type Elem;

    fn elements(&self) -> impl Iterator<Item = &Self::Elem>;
}

impl<T, const N: usize> Elements for Vector<T, N> {
    type Elem = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T, const N: usize> Elements for Point<T, N> {
    type Elem = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T> Elements for Matrix4<T> {
    type Elem = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.0.iter().flatten()
    }
}

impl<T> Elements for Quaternion<T> {
    type Elem = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.v.0.iter().chain([&self.w])
    }
}

macro_rules! impl_approx {
    ($($ty:ident<$t:ident $(, const $n:ident: usize)?>),+ $(,)?) => {
        $(
            impl<$t $(, const $n: usize)?> AbsDiffEq for $ty<$t $(, $n)?>
            where
                $t: AbsDiffEq,
                $t::Epsilon: Copy,
            {
                type Epsilon = $t::Epsilon;

                fn default_epsilon() -> Self::Epsilon {
                    $t::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                    self.elements()
                        .zip(other.elements())
                        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
                }
            }

            impl<$t $(, const $n: usize)?> RelativeEq for $ty<$t $(, $n)?>
            where
                $t: RelativeEq,
                $t::Epsilon: Copy,
            {
                fn default_max_relative() -> Self::Epsilon {
                    $t::default_max_relative()
                }

                fn relative_eq(
                    &self,
                    other: &Self,
                    epsilon: Self::Epsilon,
                    max_relative: Self::Epsilon,
                ) -> bool {
                    self.elements()
                        .zip(other.elements())
                        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
                }
            }

            impl<$t $(, const $n: usize)?> UlpsEq for $ty<$t $(, $n)?>
            where
                $t: UlpsEq,
                $t::Epsilon: Copy,
            {
                fn default_max_ulps() -> u32 {
                    $t::default_max_ulps()
                }

                fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                    self.elements()
                        .zip(other.elements())
                        .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
                }
            }
        )+
    };
}

impl_approx!(
    Vector<T, const N: usize>,
    Point<T, const N: usize>,
    Matrix4<T>,
    Quaternion<T>,
);

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq, assert_relative_ne, assert_ulps_eq};

    use crate::{point2, vec3, Matrix4, Quaternion};

    #[test]
    fn elementwise() {
        assert_abs_diff_eq!(vec3(1.0, 2.0, 3.0), vec3(1.05, 1.95, 3.0), epsilon = 0.1);
        assert_relative_ne!(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.1));
        assert_relative_eq!(point2(0.1 + 0.2, 1.0), point2(0.3, 1.0));
        assert_ulps_eq!(point2(0.1f32 + 0.2, 1.0), point2(0.3, 1.0));
    }

    #[test]
    fn matrix() {
        let mut m = Matrix4::<f64>::IDENTITY;
        assert_relative_eq!(m, Matrix4::IDENTITY);
        m[(3, 0)] = 1e-3;
        assert_relative_ne!(m, Matrix4::IDENTITY);
        assert_abs_diff_eq!(m, Matrix4::IDENTITY, epsilon = 1e-2);
    }

    #[test]
    fn quaternion_compares_scalar_part() {
        let q = Quaternion::from_components(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(q, Quaternion::IDENTITY);
        assert_relative_ne!(q, Quaternion::from_components(0.0, 0.0, 0.0, 0.9));
        assert_relative_ne!(q, Quaternion::from_components(0.1, 0.0, 0.0, 1.0));
    }
}
