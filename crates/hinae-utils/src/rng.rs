//! A small, deterministic pseudo-random number generator.
//!
//! Renderers want reproducible noise: the same seed must produce the same image. The
//! [`LinearCongruentialGenerator`] is tiny, fast and fully determined by its seed, which is all
//! that's needed for sampling.

use std::{
    env,
    marker::PhantomData,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context;

/// The environment variable read by [`LinearCongruentialGenerator::from_env`].
pub const SEED_VAR: &str = "HINAE_SEED";

/// The "minimal standard" multiplicative generator, producing values of type `T`.
pub type Lcg<T> = LinearCongruentialGenerator<T, 16807, 0, { u32::MAX as u64 }>;

/// Types that a [`LinearCongruentialGenerator`] can produce.
///
/// Floating-point types map the generator state into `[0, 1)`, integer types return the raw state.
pub trait Sample {
    fn from_state(state: u64, modulus: u64) -> Self;
}

macro_rules! impl_sample_float {
    ($($t:ty),+) => {
        $(
            impl Sample for $t {
                #[inline]
                fn from_state(state: u64, modulus: u64) -> Self {
                    let x = (state as f64 / modulus as f64) as $t;
                    // narrowing can round the largest states up to exactly 1
                    if x < 1.0 {
                        x
                    } else {
                        <$t>::from_bits((1.0 as $t).to_bits() - 1)
                    }
                }
            }
        )+
    };
}
impl_sample_float!(f32, f64);

macro_rules! impl_sample_int {
    ($($t:ty),+) => {
        $(
            impl Sample for $t {
                #[inline]
                fn from_state(state: u64, _modulus: u64) -> Self {
                    state as $t
                }
            }
        )+
    };
}
impl_sample_int!(u32, u64, i64, usize);

/// A linear congruential generator computing `state = (A * state + C) mod M`.
///
/// The state is kept in 64-bit arithmetic, so `A * (M - 1) + C` must fit in a [`u64`].
///
/// # Examples
///
/// ```
/// # use hinae_utils::rng::Lcg;
/// let mut a = Lcg::<f64>::new(42);
/// let mut b = Lcg::<f64>::new(42);
/// let x = a.get();
/// assert!((0.0..1.0).contains(&x));
/// assert_eq!(x, b.get());
/// ```
#[derive(Clone, Debug)]
pub struct LinearCongruentialGenerator<T, const A: u64, const C: u64, const M: u64> {
    state: u64,
    _p: PhantomData<fn() -> T>,
}

impl<T: Sample, const A: u64, const C: u64, const M: u64> LinearCongruentialGenerator<T, A, C, M> {
    /// Creates a generator from an explicit seed.
    ///
    /// A multiplicative generator (`C == 0`) never leaves a zero state, so a seed that is `0`
    /// modulo `M` is replaced by 1.
    pub fn new(seed: u32) -> Self {
        let mut state = u64::from(seed) % M;
        if state == 0 && C == 0 {
            state = 1;
        }
        Self {
            state,
            _p: PhantomData,
        }
    }

    /// Creates a generator seeded from the `HINAE_SEED` environment variable.
    ///
    /// If the variable is not set, the generator is seeded from the system clock instead.
    ///
    /// # Errors
    ///
    /// Returns an error if `HINAE_SEED` is set, but isn't a decimal [`u32`].
    pub fn from_env() -> anyhow::Result<Self> {
        let seed = match env::var(SEED_VAR) {
            Ok(s) => s
                .trim()
                .parse::<u32>()
                .with_context(|| format!("invalid `{SEED_VAR}` value '{s}'"))?,
            Err(env::VarError::NotPresent) => clock_seed()?,
            Err(e) => return Err(e).with_context(|| format!("failed to read `{SEED_VAR}`")),
        };
        log::trace!("seeding RNG with {seed}");
        Ok(Self::new(seed))
    }

    /// Advances the generator and returns the new value.
    pub fn get(&mut self) -> T {
        self.state = (A * self.state + C) % M;
        T::from_state(self.state, M)
    }
}

impl<T: Sample, const A: u64, const C: u64, const M: u64> Iterator
    for LinearCongruentialGenerator<T, A, C, M>
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.get())
    }
}

fn clock_seed() -> anyhow::Result<u32> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is set before the UNIX epoch")?;
    Ok(elapsed.as_secs() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_standard_sequence() {
        let mut rng = Lcg::<u64>::new(1);
        assert_eq!(rng.get(), 16807);
        assert_eq!(rng.get(), 16807 * 16807);
        assert_eq!(rng.get(), 16807 * 16807 * 16807 % u64::from(u32::MAX));
    }

    #[test]
    fn zero_seed_does_not_get_stuck() {
        let mut zero = Lcg::<u32>::new(0);
        let mut one = Lcg::<u32>::new(1);
        assert_ne!(zero.get(), 0);
        assert_eq!(zero.take(10).collect::<Vec<_>>(), {
            one.get();
            one.take(10).collect::<Vec<_>>()
        });

        let mut wrapped = Lcg::<u32>::new(u32::MAX);
        assert_eq!(wrapped.get(), 16807);
    }

    #[test]
    fn floats_in_unit_interval() {
        let rng = Lcg::<f32>::new(12345);
        for x in rng.take(1000) {
            assert!((0.0..1.0).contains(&x), "{x}");
        }

        let values: Vec<f64> = Lcg::new(7).take(1000).collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert!((mean - 0.5).abs() < 0.05, "mean={mean}");
    }

    #[test]
    fn affine_generator() {
        let mut rng = LinearCongruentialGenerator::<u64, 5, 3, 16>::new(0);
        let seq: Vec<_> = (0..4).map(|_| rng.get()).collect();
        assert_eq!(seq, [3, 2, 13, 4]);
    }

    // The only test touching `HINAE_SEED`, so it can't race with another one.
    #[test]
    fn seed_from_env() {
        crate::init_logger!();

        env::set_var(SEED_VAR, "77");
        let mut rng = Lcg::<u32>::from_env().unwrap();
        assert_eq!(rng.get(), Lcg::<u32>::new(77).get());

        env::set_var(SEED_VAR, " 78\n");
        assert_eq!(
            Lcg::<u32>::from_env().unwrap().get(),
            Lcg::<u32>::new(78).get()
        );

        env::set_var(SEED_VAR, "-3");
        let err = Lcg::<f32>::from_env().unwrap_err();
        assert!(err.to_string().contains(SEED_VAR), "{err}");

        env::remove_var(SEED_VAR);
        let mut rng = Lcg::<f64>::from_env().unwrap();
        assert!((0.0..1.0).contains(&rng.get()));
    }

    #[test]
    fn deterministic() {
        let a: Vec<u32> = Lcg::new(99).take(20).collect();
        let b: Vec<u32> = Lcg::new(99).take(20).collect();
        let c: Vec<u32> = Lcg::new(100).take(20).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
