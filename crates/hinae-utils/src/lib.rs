//! Rendering helpers built on top of [`hinae_linalg`].
//!
//! This crate contains the small pieces of math a renderer needs besides plain linear algebra:
//! a seedable random number generator, trigonometric identities, reflection/refraction and
//! Fresnel terms, and conversions between coordinate systems.
//!
//! # Environment Variables
//!
//! * `HINAE_SEED`: Seeds generators created with [`Lcg::from_env`]. Must be a decimal `u32`. If
//!   unset, the generator is seeded from the system clock.
//! * `RUST_LOG`: Overrides the log filter installed by [`init_logger!`].
//!
//! [`Lcg::from_env`]: rng::LinearCongruentialGenerator::from_env

use log::LevelFilter;

pub mod coordinate;
pub mod optics;
pub mod rng;
pub mod trig;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some("hinae_linalg"), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and the Hinae crates will log at *debug* level. The `RUST_LOG` environment
/// variable can be used to change that.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
