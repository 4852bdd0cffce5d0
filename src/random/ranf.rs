//! Random number generation, from Knuth's ranf (in Seminumerical Algorithm)

use crate::numeric::Float;

// Generated random numbers will have a granularity of 1/MODULO
type Integer = i32;
const MODULO: Integer = 1_000_000_000;
const INV_MODULO: Float = 1e-9;

/// Size of the lagged Fibonacci state, plus one unused slot at index 0
const STATE_LEN: usize = 56;

/// Seed used when no explicit seed is requested
const DEFAULT_SEED: Integer = 234_612_947;

/// Lagged Fibonacci random number generator
#[derive(Clone)]
pub struct RanfGenerator {
    /// Seed which this generator was initialized with
    seed: Integer,

    /// Current batch of random integers in [0, MODULO)
    state: [Integer; STATE_LEN],

    /// Number of values of the current batch which remain to be consumed
    remaining: usize,
}
//
impl RanfGenerator {
    /// Create a generator with the default seed
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED as u32)
    }

    /// Create a generator from an explicit seed, reduced into [0, MODULO)
    pub fn with_seed(seed: u32) -> Self {
        let seed = (seed % MODULO as u32) as Integer;
        let mut state = [0; STATE_LEN];
        state[STATE_LEN - 1] = seed;
        let (mut previous, mut next) = (seed, 1);
        for i in 1..STATE_LEN - 1 {
            let slot = (21 * i) % (STATE_LEN - 1);
            state[slot] = next;
            next = previous - next;
            if next < 0 {
                next += MODULO;
            }
            previous = state[slot];
        }

        let mut result = Self {
            seed,
            state,
            remaining: STATE_LEN - 1,
        };

        // Warm up the sequence a bit
        for _ in 0..10 {
            result.refill();
        }
        result
    }

    /// Seed which this generator was built from
    pub fn seed(&self) -> u32 {
        self.seed as u32
    }

    /// Generate a random number in [0, 1), with INV_MODULO granularity
    ///
    /// Exact zeros can and do come out of this generator, which is why
    /// physics engines go through `EngineRandom` instead.
    ///
    pub fn random(&mut self) -> Float {
        if self.remaining == 0 {
            self.refill();
            self.remaining = STATE_LEN - 1;
        }
        let value = self.state[self.remaining];
        self.remaining -= 1;
        (value as Float) * INV_MODULO
    }

    /// Generate 55 new random integers
    fn refill(&mut self) {
        for i in 1..25 {
            self.state[i] -= self.state[i + 31];
            if self.state[i] < 0 {
                self.state[i] += MODULO;
            }
        }
        for i in 25..STATE_LEN {
            self.state[i] -= self.state[i - 24];
            if self.state[i] < 0 {
                self.state[i] += MODULO;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_in_unit_interval() {
        let mut rng = RanfGenerator::new();
        for _ in 0..10_000 {
            let r = rng.random();
            assert!((0. ..1.).contains(&r));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut rng1 = RanfGenerator::with_seed(42);
        let mut rng2 = RanfGenerator::with_seed(42);
        for _ in 0..200 {
            assert_eq!(rng1.random(), rng2.random());
        }
        assert_eq!(rng1.seed(), 42);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut rng1 = RanfGenerator::with_seed(1);
        let mut rng2 = RanfGenerator::with_seed(2);
        let diverged = (0..100).any(|_| rng1.random() != rng2.random());
        assert!(diverged);
    }
}
