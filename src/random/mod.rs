//! Random number generation module. Uses either a port of Knuth's ranf random
//! number generator or the "rand" crate that is the Rust standard for RNGs.
//!
//! Every consumer of randomness in this crate takes a generator handle as a
//! parameter instead of reaching out for a global instance.

mod bridge;
#[cfg(not(feature = "standard-random"))]
mod ranf;
#[cfg(feature = "standard-random")]
mod standard;

use crate::numeric::Float;

pub use self::bridge::EngineRandom;

/// Select the RNG implementation in use
#[cfg(not(feature = "standard-random"))]
pub use self::ranf::RanfGenerator as RandomGenerator;
#[cfg(feature = "standard-random")]
pub use self::standard::RandGenerator as RandomGenerator;

/// Source of uniformly distributed random numbers in [0, 1)
pub trait UniformSource {
    /// Draw the next random number
    fn uniform(&mut self) -> Float;
}

impl<R: UniformSource + ?Sized> UniformSource for &mut R {
    fn uniform(&mut self) -> Float {
        (**self).uniform()
    }
}

impl UniformSource for RandomGenerator {
    fn uniform(&mut self) -> Float {
        self.random()
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}
