//! The random source used for throttle draws.

use std::sync::{Arc, LazyLock};

use cascade_utils::random::{Random, RandomKind, RandomSource};
use parking_lot::Mutex;

/// Process-wide source for hosts that do not configure their own.
pub static DEFAULT_FLUID_RANDOM: LazyLock<Arc<FluidRandom>> =
    LazyLock::new(|| Arc::new(FluidRandom::from_entropy(RandomKind::Legacy)));

/// A re-seedable random source shared by every evaluation of a world.
pub struct FluidRandom {
    source: Mutex<RandomSource>,
}

impl FluidRandom {
    /// Creates a source of the given kind from a fixed seed.
    #[must_use]
    pub fn new(kind: RandomKind, seed: u64) -> Self {
        Self {
            source: Mutex::new(RandomSource::new(kind, seed)),
        }
    }

    /// Creates a source seeded from the operating system.
    #[must_use]
    pub fn from_entropy(kind: RandomKind) -> Self {
        Self::new(kind, rand::random::<u64>())
    }

    /// Restarts the sequence from `seed`, keeping the generator kind.
    pub fn reseed(&self, seed: u64) {
        let mut source = self.source.lock();
        *source = RandomSource::new(source.kind(), seed);
    }

    /// Returns a value in `0..bound`.
    pub fn next_i32_bounded(&self, bound: i32) -> i32 {
        self.source.lock().next_i32_bounded(bound)
    }

    /// Returns true with a one in `chance` probability.
    pub fn roll(&self, chance: i32) -> bool {
        chance <= 1 || self.next_i32_bounded(chance) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(random: &FluidRandom) -> Vec<i32> {
        (0..32).map(|_| random.next_i32_bounded(4)).collect()
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let a = FluidRandom::new(RandomKind::Legacy, 1234);
        let b = FluidRandom::new(RandomKind::Legacy, 1234);
        assert_eq!(draws(&a), draws(&b));
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let random = FluidRandom::new(RandomKind::Xoroshiro, 99);
        let first = draws(&random);
        random.reseed(99);
        assert_eq!(draws(&random), first);
    }

    #[test]
    fn test_roll_of_one_always_passes() {
        let random = FluidRandom::new(RandomKind::Legacy, 0);
        assert!((0..16).all(|_| random.roll(1)));
    }
}
