//! Reflection, refraction and Fresnel reflectance.
//!
//! Directions are unit vectors. The incident direction `wi` points *towards* the surface, and the
//! normal `n` points out of it (against `wi`).

use hinae_linalg::{dot, Float, Vector3};

use crate::trig::{cos_to_sin2, sin2_to_cos};

/// Reflects `wi` about the normal `n`.
pub fn reflect<T: Float>(wi: Vector3<T>, n: Vector3<T>) -> Vector3<T> {
    let two = T::ONE + T::ONE;
    wi - n * (two * dot(wi, n))
}

/// Refracts `wi` through a surface with normal `n`, following Snell's law.
///
/// `eta` is the ratio `eta_i / eta_t` of the refractive indices on the incident and transmitted
/// side. Returns [`None`] on total internal reflection.
///
/// # Examples
///
/// ```
/// # use hinae_linalg::*;
/// # use hinae_utils::optics::refract;
/// // straight through at normal incidence
/// let t = refract(vec3(0.0, 0.0, -1.0), Vector3::Z, 1.0 / 1.5).unwrap();
/// assert_eq!(t, vec3(0.0, 0.0, -1.0));
/// ```
pub fn refract<T: Float>(wi: Vector3<T>, n: Vector3<T>, eta: T) -> Option<Vector3<T>> {
    let cos_i = -dot(wi, n);
    let sin2_i = cos_to_sin2(cos_i);
    let sin2_t = eta * eta * sin2_i;
    if sin2_t >= T::ONE {
        log::trace!("total internal reflection");
        return None;
    }

    let cos_t = sin2_to_cos(sin2_t);
    Some(wi * eta + n * (eta * cos_i - cos_t))
}

/// Fresnel reflectance: the fraction of light reflected (instead of transmitted) at a surface.
pub mod fresnel {
    use hinae_linalg::{Float, Vector3};

    use crate::trig::{cos_to_sin, sin_to_cos};

    /// Computes the unpolarized reflectance at the boundary between two dielectrics.
    ///
    /// `cos_theta_i` is the cosine between the incident direction and the normal on the side of
    /// the medium with index `eta_i`. A negative cosine means the light arrives from the other
    /// side, and the two media are swapped.
    ///
    /// Returns 1 on total internal reflection.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hinae_utils::optics::fresnel;
    /// // air to glass, head-on: 4% of the light is reflected
    /// let r: f64 = fresnel::dielectric(1.0, 1.0, 1.5);
    /// assert!((r - 0.04).abs() < 1e-12);
    /// ```
    pub fn dielectric<T: Float>(cos_theta_i: T, mut eta_i: T, mut eta_t: T) -> T {
        let mut cos_theta_i = cos_theta_i.clamp(-T::ONE, T::ONE);
        if cos_theta_i < T::ZERO {
            std::mem::swap(&mut eta_i, &mut eta_t);
            cos_theta_i = cos_theta_i.abs();
        }

        let sin_theta_i = cos_to_sin(cos_theta_i);
        let sin_theta_t = eta_i / eta_t * sin_theta_i;
        if sin_theta_t >= T::ONE {
            return T::ONE;
        }
        let cos_theta_t = sin_to_cos(sin_theta_t);

        let r_parl = (eta_t * cos_theta_i - eta_i * cos_theta_t)
            / (eta_t * cos_theta_i + eta_i * cos_theta_t);
        let r_perp = (eta_i * cos_theta_i - eta_t * cos_theta_t)
            / (eta_i * cos_theta_i + eta_t * cos_theta_t);

        (r_parl * r_parl + r_perp * r_perp) / (T::ONE + T::ONE)
    }

    /// Computes the per-channel reflectance of a conductor.
    ///
    /// `eta_t` and `k` are the real and imaginary parts of the conductor's complex refractive
    /// index, and `eta_i` is the index of the dielectric the light arrives from. Each vector
    /// holds one value per color channel.
    pub fn conductor<T: Float>(
        cos_theta_i: T,
        eta_t: Vector3<T>,
        eta_i: Vector3<T>,
        k: Vector3<T>,
    ) -> Vector3<T> {
        let two = T::ONE + T::ONE;
        let cos_theta_i = cos_theta_i.clamp(-T::ONE, T::ONE);
        let eta = eta_t / eta_i;
        let eta_k = k / eta_i;

        let cos2_theta_i = cos_theta_i * cos_theta_i;
        let sin2_theta_i = T::ONE - cos2_theta_i;
        let eta2 = eta * eta;
        let eta_k2 = eta_k * eta_k;

        let t0 = eta2 - eta_k2 - sin2_theta_i;
        let a2_plus_b2 = (t0 * t0 + eta2 * eta_k2 * (two * two)).map(T::sqrt);
        let t1 = a2_plus_b2 + cos2_theta_i;
        let a = ((a2_plus_b2 + t0) / two).map(T::sqrt);
        let t2 = a * (two * cos_theta_i);
        let rs = (t1 - t2) / (t1 + t2);

        let t3 = a2_plus_b2 * cos2_theta_i + sin2_theta_i * sin2_theta_i;
        let t4 = t2 * sin2_theta_i;
        let rp = rs * (t3 - t4) / (t3 + t4);

        (rp + rs) / two
    }
}
