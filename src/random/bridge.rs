//! Random number source handed over to external physics engines
//!
//! Fortran physics packages draw their random numbers through a callback that
//! must never return exactly 0 or 1, since they happily take the logarithm of
//! it. This module wraps a uniform generator so that it honors that contract.

use super::{RandomGenerator, UniformSource};
use crate::numeric::Float;

/// Open-interval random number source for physics engines
///
/// Building it with `default()` selects the default `RandomGenerator`, which
/// is what engines get when the embedding code does not provide a generator
/// of its own.
///
pub struct EngineRandom<R = RandomGenerator> {
    generator: R,
}
//
impl<R: UniformSource + Default> Default for EngineRandom<R> {
    fn default() -> Self {
        Self::with_generator(R::default())
    }
}
//
impl<R: UniformSource> EngineRandom<R> {
    /// Use an existing generator
    pub fn with_generator(generator: R) -> Self {
        Self { generator }
    }

    /// Replace the generator, falling back to the default one on None
    pub fn set_generator(&mut self, generator: Option<R>)
    where
        R: Default,
    {
        self.generator = generator.unwrap_or_default();
    }

    /// Access the underlying generator
    pub fn generator(&self) -> &R {
        &self.generator
    }

    /// Access the underlying generator mutably, e.g. to reseed it
    pub fn generator_mut(&mut self) -> &mut R {
        &mut self.generator
    }

    /// Draw a random number strictly inside (0, 1)
    pub fn draw(&mut self) -> Float {
        loop {
            let r = self.generator.uniform();
            if r > 0. && r < 1. {
                return r;
            }
        }
    }

    /// Expose `draw` as a plain callback for engine registration
    pub fn as_callback(&mut self) -> impl FnMut() -> Float + '_ {
        move || self.draw()
    }

    /// Give the generator back
    pub fn into_inner(self) -> R {
        self.generator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed sequence, then repeats its last value
    #[derive(Default)]
    struct Scripted {
        values: Vec<Float>,
        calls: usize,
    }
    //
    impl UniformSource for Scripted {
        fn uniform(&mut self) -> Float {
            let idx = self.calls.min(self.values.len() - 1);
            self.calls += 1;
            self.values[idx]
        }
    }

    #[test]
    fn boundary_values_are_redrawn() {
        let mut rng = EngineRandom::with_generator(Scripted {
            values: vec![0., 1., 0., 0.25],
            calls: 0,
        });
        assert_eq!(rng.draw(), 0.25);
        assert_eq!(rng.generator().calls, 4);
    }

    #[test]
    fn callback_forwards_draws() {
        let mut rng = EngineRandom::with_generator(Scripted {
            values: vec![0.5, 0., 0.75],
            calls: 0,
        });
        let mut callback = rng.as_callback();
        assert_eq!(callback(), 0.5);
        assert_eq!(callback(), 0.75);
    }

    #[test]
    fn reset_to_default_generator() {
        let mut rng = EngineRandom::with_generator(RandomGenerator::with_seed(7));
        assert_eq!(rng.generator().seed(), 7);
        rng.set_generator(None);
        assert_eq!(rng.generator().seed(), RandomGenerator::new().seed());
        rng.set_generator(Some(RandomGenerator::with_seed(9)));
        assert_eq!(rng.generator().seed(), 9);
    }

    #[test]
    fn shared_generator_handle() {
        let mut shared = Scripted {
            values: vec![0.5],
            calls: 0,
        };
        {
            let mut rng = EngineRandom::with_generator(&mut shared);
            rng.draw();
            rng.draw();
        }
        assert_eq!(shared.calls, 2);
    }
}
